//! Canonical/transport identifier codec.
//!
//! Canonical ids are hierarchical (`lattice/schemas/events`); transport ids
//! flatten the hierarchy separator to `-` (`lattice-schemas-events`) so they
//! survive flat namespaces at the system boundary. The engine works in
//! canonical-id space internally; this module is the only place the two
//! representations meet.

use crate::registry::Registry;

/// Encode a canonical id as a transport id.
///
/// Total and deterministic: every `/` becomes `-`.
pub fn encode(id: &str) -> String {
    id.replace('/', "-")
}

/// Decode a transport id back to a canonical id within one registry.
///
/// Scans the registry's known ids and returns the first whose encoding equals
/// the input. An unrecognized transport id decodes to the registry's default
/// document rather than failing: the resource-lookup path must never hard-error
/// on a bad identifier.
pub fn decode(registry: &Registry, transport: &str) -> &'static str {
    registry
        .ids()
        .find(|id| encode(id) == transport)
        .unwrap_or_else(|| registry.default_id())
}

/// Complete a partial transport id against one registry.
///
/// Case-insensitive prefix match over encoded ids, in registry order.
pub fn complete(registry: &Registry, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    registry
        .ids()
        .map(encode)
        .filter(|t| t.to_lowercase().starts_with(&prefix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_flattens_separators() {
        assert_eq!(encode("lattice/schemas/events"), "lattice-schemas-events");
        assert_eq!(encode("lattice"), "lattice");
    }

    #[test]
    fn decode_round_trips_every_id() {
        for registry in [Registry::core(), Registry::repo()] {
            for id in registry.ids() {
                assert_eq!(decode(registry, &encode(id)), id);
            }
        }
    }

    #[test]
    fn decode_unknown_falls_back_to_default() {
        assert_eq!(decode(Registry::core(), "no-such-doc"), "lattice");
        assert_eq!(decode(Registry::repo(), "no-such-doc"), "lattice-repo");
        assert_eq!(decode(Registry::core(), ""), "lattice");
    }

    #[test]
    fn decode_is_per_registry() {
        // A repo-docs transport id means nothing to the core registry.
        assert_eq!(decode(Registry::core(), "lattice-repo-docs"), "lattice");
    }

    #[test]
    fn complete_matches_prefix_in_registry_order() {
        let matches = complete(Registry::core(), "lattice-schemas");
        assert_eq!(
            matches,
            vec![
                "lattice-schemas-events",
                "lattice-schemas-blocks",
                "lattice-schemas-metrics",
            ]
        );
    }

    #[test]
    fn complete_is_case_insensitive() {
        let matches = complete(Registry::core(), "LATTICE-GET");
        assert_eq!(matches, vec!["lattice-getting-started"]);
    }

    #[test]
    fn complete_empty_prefix_lists_everything() {
        let matches = complete(Registry::core(), "");
        assert_eq!(matches.len(), Registry::core().entries().len());
        assert_eq!(matches[0], "lattice");
    }

    #[test]
    fn complete_no_matches_is_empty() {
        assert!(complete(Registry::core(), "zzz").is_empty());
    }
}
