use std::collections::BTreeMap;

use crate::property::PropertyView;

/// Properties keyed by their `Definition`.
///
/// Keys iterate in lexicographic order; each list keeps the order the
/// properties were handed in.
pub type RecordsByDefinition<P> = BTreeMap<String, Vec<P>>;

pub fn group_by_definition<P, I>(properties: I) -> RecordsByDefinition<P>
where
    P: PropertyView,
    I: IntoIterator<Item = P>,
{
    let mut groups: RecordsByDefinition<P> = BTreeMap::new();
    for property in properties {
        groups
            .entry(property.definition().to_string())
            .or_default()
            .push(property);
    }
    groups
}
