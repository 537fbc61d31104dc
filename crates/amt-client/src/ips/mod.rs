//! Intel IPS classes (`http://intel.com/wbem/wscim/1/ips-schema/1/`).

pub mod alarm_clock;
pub mod opt_in;

use amt_wsman::MessageCreator;

use crate::transport::Transport;

pub use alarm_clock::{AlarmClockOccurrence, AlarmClockOccurrenceMessages};
pub use opt_in::{OptInService, OptInServiceMessages};

pub const RESOURCE_URI_PREFIX: &str = "http://intel.com/wbem/wscim/1/ips-schema/1/";

/// Entry point for IPS classes, with its own message counter.
pub struct Messages<'t> {
    creator: MessageCreator,
    transport: Option<&'t dyn Transport>,
}

impl<'t> Messages<'t> {
    pub fn new(transport: &'t dyn Transport) -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), Some(transport))
    }

    pub fn offline() -> Self {
        Self::with_creator(MessageCreator::new(RESOURCE_URI_PREFIX), None)
    }

    pub fn with_creator(creator: MessageCreator, transport: Option<&'t dyn Transport>) -> Self {
        Self { creator, transport }
    }

    pub fn creator(&self) -> &MessageCreator {
        &self.creator
    }

    pub fn opt_in_service(&self) -> OptInServiceMessages<'_> {
        OptInServiceMessages::new(&self.creator, self.transport)
    }

    pub fn alarm_clock_occurrence(&self) -> AlarmClockOccurrenceMessages<'_> {
        AlarmClockOccurrenceMessages::new(&self.creator, self.transport)
    }
}
