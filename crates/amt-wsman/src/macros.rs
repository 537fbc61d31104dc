/// Implements [`Namespaceable`](crate::Namespaceable) for a payload struct
/// whose `namespace: String` field is serialized as `@xmlns:h`.
///
/// The two-argument form also exposes a `String` field as the instance
/// identity used for a Put without explicit selectors.
///
/// ```ignore
/// impl_namespaceable!(GeneralSettings);
/// impl_namespaceable!(TlsSettingData, instance_id);
/// ```
#[macro_export]
macro_rules! impl_namespaceable {
    ($name:ty) => {
        impl $crate::Namespaceable for $name {
            fn set_namespace(&mut self, resource_uri: &str) {
                self.namespace = resource_uri.to_owned();
            }
        }
    };
    ($name:ty, $id_field:ident) => {
        impl $crate::Namespaceable for $name {
            fn set_namespace(&mut self, resource_uri: &str) {
                self.namespace = resource_uri.to_owned();
            }

            fn instance_id(&self) -> Option<String> {
                Some(self.$id_field.clone()).filter(|id| !id.is_empty())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Namespaceable;

    #[derive(Default)]
    struct Plain {
        namespace: String,
    }

    #[derive(Default)]
    struct Identified {
        namespace: String,
        instance_id: String,
    }

    impl_namespaceable!(Plain);
    impl_namespaceable!(Identified, instance_id);

    #[test]
    fn test_plain_payload_has_no_identity() {
        let mut plain = Plain::default();
        plain.set_namespace("urn:a");
        assert_eq!(plain.namespace, "urn:a");
        assert_eq!(plain.instance_id(), None);
    }

    #[test]
    fn test_identified_payload() {
        let mut identified = Identified::default();
        assert_eq!(identified.instance_id(), None);
        identified.instance_id = "Intel(r) AMT 802.3 TLS Settings".to_owned();
        identified.set_namespace("urn:b");
        assert_eq!(identified.namespace, "urn:b");
        assert_eq!(
            identified.instance_id().as_deref(),
            Some("Intel(r) AMT 802.3 TLS Settings")
        );
    }
}
