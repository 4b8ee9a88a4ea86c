//! Recursive merging of TOML tables.

use toml::{Table, Value};

/// Merges `overlay` on top of `base`.
///
/// Keys present in both where both values are tables are merged
/// recursively; for every other key the overlay value replaces the base
/// value. Keys only in `base` are kept.
pub fn deep_merge(base: Table, overlay: Table) -> Table {
    let mut merged = base;
    for (key, value) in overlay {
        let combined = match (merged.remove(&key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                Value::Table(deep_merge(base_table, overlay_table))
            }
            (_, value) => value,
        };
        merged.insert(key, combined);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: &str) -> Table {
        source.parse::<Table>().unwrap()
    }

    #[test]
    fn simple_update() {
        let merged = deep_merge(table("a = 1\nb = 2"), table("b = 3\nc = 4"));
        assert_eq!(merged, table("a = 1\nb = 3\nc = 4"));
    }

    #[test]
    fn nested_update() {
        let base = table(
            r#"
            other = "value"
            [paths]
            dir1 = "/path1"
            dir2 = "/path2"
            "#,
        );
        let overlay = table(
            r#"
            [paths]
            dir2 = "/newpath2"
            dir3 = "/path3"
            "#,
        );
        let expected = table(
            r#"
            other = "value"
            [paths]
            dir1 = "/path1"
            dir2 = "/newpath2"
            dir3 = "/path3"
            "#,
        );
        assert_eq!(deep_merge(base, overlay), expected);
    }

    #[test]
    fn deep_nested_update() {
        let merged = deep_merge(
            table("[level1.level2]\nlevel3 = \"old\""),
            table("[level1.level2]\nlevel3 = \"new\"\nextra = \"value\""),
        );
        assert_eq!(
            merged,
            table("[level1.level2]\nlevel3 = \"new\"\nextra = \"value\"")
        );
    }

    #[test]
    fn non_table_replaces_table() {
        let merged = deep_merge(table("[paths]\na = 1"), table("paths = \"flat\""));
        assert_eq!(merged, table("paths = \"flat\""));
    }

    #[test]
    fn arrays_are_replaced_not_appended() {
        let merged = deep_merge(
            table("[inventory]\nsubjects = [\"01\", \"02\"]"),
            table("[inventory]\nsubjects = [\"03\"]"),
        );
        assert_eq!(merged, table("[inventory]\nsubjects = [\"03\"]"));
    }
}
