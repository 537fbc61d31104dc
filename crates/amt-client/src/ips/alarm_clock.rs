use amt_wsman::{MessageCreator, SelectorSet};
use serde::{Deserialize, Serialize};

use crate::{BodyResponse, ClientError, base::Base, transport::Transport};

pub const CLASS_NAME: &str = "IPS_AlarmClockOccurrence";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Datetime {
    #[serde(rename = "Datetime")]
    pub datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    #[serde(rename = "Interval")]
    pub interval: String,
}

/// A scheduled wake-up of the managed system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmClockOccurrence {
    #[serde(rename = "DeleteOnCompletion")]
    pub delete_on_completion: bool,
    #[serde(rename = "ElementName")]
    pub element_name: String,
    #[serde(rename = "InstanceID")]
    pub instance_id: String,
    #[serde(rename = "Interval")]
    pub interval: Interval,
    #[serde(rename = "StartTime")]
    pub start_time: Datetime,
}

fn name_selector(name: &str) -> SelectorSet {
    SelectorSet::new().add_selector("Name", name)
}

pub struct AlarmClockOccurrenceMessages<'a> {
    base: Base<'a, AlarmClockOccurrence>,
}

impl<'a> AlarmClockOccurrenceMessages<'a> {
    pub fn new(creator: &'a MessageCreator, transport: Option<&'a dyn Transport>) -> Self {
        Self {
            base: Base::new(creator, CLASS_NAME, transport),
        }
    }

    pub fn get(&self, name: &str) -> Result<BodyResponse<AlarmClockOccurrence>, ClientError> {
        self.base.get(Some(&name_selector(name)))
    }

    pub fn enumerate(&self) -> Result<BodyResponse<AlarmClockOccurrence>, ClientError> {
        self.base.enumerate()
    }

    pub fn pull(
        &self,
        enumeration_context: &str,
    ) -> Result<BodyResponse<AlarmClockOccurrence>, ClientError> {
        self.base.pull(enumeration_context)
    }

    pub fn delete(&self, name: &str) -> Result<BodyResponse<AlarmClockOccurrence>, ClientError> {
        self.base.delete(&name_selector(name))
    }
}
