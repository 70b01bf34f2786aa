//! Declarative machine configuration.
//!
//! Configurations use the following JSON shape:
//!
//! ```json
//! {
//!   "initial": "off",
//!   "states": {
//!     "off": { "transitions": { "turnOn": "on" } },
//!     "on":  { "transitions": { "turnOff": "off" } }
//!   }
//! }
//! ```
//!
//! Declared order of states and transitions is kept, so queries that list
//! states answer in the order the configuration wrote them.

use super::state::{EventId, StateId};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::Read;
use std::marker::PhantomData;

/// Map that remembers insertion order.
///
/// Inserting an existing key replaces its value in place, mirroring how a
/// JSON object with duplicate keys keeps the first position and last value.
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    /// Key -> position in `entries`.
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: Deserialize<'de> + Hash + Eq + Clone,
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<K, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Transitions available from one state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name -> target state, in declared order.
    #[serde(default)]
    pub transitions: OrderedMap<EventId, StateId>,
}

impl StateDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, replacing any earlier target for the same event.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target for `event`, if one is declared.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }
}

/// Complete machine configuration.
///
/// Neither `initial` nor the transition targets are checked against
/// `states` here; see [`crate::validation`] for the opt-in checks.
///
/// # Example
///
/// ```rust
/// use rewind::core::{MachineConfig, StateDefinition};
///
/// let config = MachineConfig::new("off")
///     .with_state("off", StateDefinition::new().on("turnOn", "on"))
///     .with_state("on", StateDefinition::new().on("turnOff", "off"));
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.transition("off", "turnOn").unwrap(), "on");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in.
    pub initial: StateId,

    /// State name -> definition, in declared order.
    pub states: OrderedMap<StateId, StateDefinition>,
}

impl MachineConfig {
    /// Start a configuration with no states.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: OrderedMap::new(),
        }
    }

    /// Declare a state, replacing any earlier definition with the same name.
    pub fn with_state(mut self, name: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse a configuration from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Render back to the JSON shape it was read from.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Target reached by firing `event` in `state`.
    pub fn transition(&self, state: &str, event: &str) -> Option<&StateId> {
        self.state(state).and_then(|definition| definition.target(event))
    }

    /// All state names in declared order.
    pub fn state_names(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    /// States with a usable transition for `event`, in declared order.
    ///
    /// A blank target counts as no transition.
    pub fn states_handling(&self, event: &str) -> Vec<&StateId> {
        self.states
            .iter()
            .filter(|(_, definition)| {
                definition
                    .target(event)
                    .is_some_and(|target| !target.is_blank())
            })
            .map(|(name, _)| name)
            .collect()
    }
}
