//! Lenient decoding shared by every API record.
//!
//! Backends built on document stores send the identifier as `_id`, as `id`,
//! or as both, and serialize unset fields as `null`. Records declared with
//! [`record!`] accept all of these: a missing or `null` field takes its
//! default, and the identifier prefers a non-blank `id` over `_id`.

/// Resolves the identifier of a decoded record.
pub(crate) fn merge_id(id: Option<String>, mongo_id: Option<String>) -> String {
    id.filter(|id| !id.trim().is_empty())
        .or(mongo_id)
        .unwrap_or_default()
}

/// Declares a record struct with a leading `pub id: String` and a
/// `Deserialize` impl that tolerates `_id`, duplicate ids and `null` fields.
/// Serialization stays camelCase with a plain `id`.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$field_meta:meta])* pub $field:ident: $ty:ty,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub id: String,
            $($(#[$field_meta])* pub $field: $ty,)*
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(rename_all = "camelCase")]
                struct Wire {
                    id: Option<String>,
                    #[serde(rename = "_id")]
                    mongo_id: Option<String>,
                    $($field: Option<$ty>,)*
                }

                let wire = <Wire as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self {
                    id: $crate::content::record::merge_id(wire.id, wire.mongo_id),
                    $($field: wire.$field.unwrap_or_default(),)*
                })
            }
        }
    };
}

pub(crate) use record;
