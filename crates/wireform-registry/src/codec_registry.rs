//! Type-keyed codec registry.

use crate::error::RegistryError;
use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;
use wireform_codec::Codec;
use wireform_codec::RawValue;

/// One registered codec, type-erased.
struct Entry {
    /// `type_name` of the `(R, T)` pair, for diagnostics only.
    type_name: &'static str,
    codec: Box<dyn Any + Send + Sync>,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// An explicit mapping from a `(raw, typed)` type pair to its codec.
///
/// The replacement for ambient codec resolution: callers build this once
/// at startup and pass it to endpoint construction. Lookup is by the
/// static types at the call site; registering the same pair twice is a
/// configuration defect reported immediately.
#[derive(Debug, Default)]
pub struct CodecRegistry {
    entries: BTreeMap<TypeId, Entry>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the codec for the `(R, T)` pair.
    pub fn register<R, T>(&mut self, codec: Codec<R, T>) -> Result<(), RegistryError>
    where
        R: RawValue + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        let key = TypeId::of::<(R, T)>();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateCodec {
                type_name: pair_name::<R, T>(),
            });
        }
        self.entries.insert(
            key,
            Entry {
                type_name: type_name::<(R, T)>(),
                codec: Box::new(codec),
            },
        );
        Ok(())
    }

    /// The codec for the `(R, T)` pair, if registered.
    pub fn get<R, T>(&self) -> Option<&Codec<R, T>>
    where
        R: RawValue + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<(R, T)>())
            .and_then(|entry| entry.codec.downcast_ref::<Codec<R, T>>())
    }

    /// The codec for the `(R, T)` pair, or a missing-codec error.
    pub fn require<R, T>(&self) -> Result<&Codec<R, T>, RegistryError>
    where
        R: RawValue + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        self.get::<R, T>()
            .ok_or_else(|| RegistryError::MissingCodec {
                type_name: pair_name::<R, T>(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn pair_name<R: 'static, T: 'static>() -> String {
    type_name::<(R, T)>().to_string()
}
