use std::collections::HashMap;

/// Deduplicates raw header names while preserving order.
///
/// The first occurrence of a name is kept as-is; each repeat is suffixed
/// with an occurrence counter starting at 1, so `["A","A","B","A"]`
/// becomes `["A","A_1","B","A_2"]`. Always succeeds.
pub fn reconcile(headers: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    headers
        .iter()
        .map(|name| {
            let count = seen.entry(name.as_str()).or_insert(0);
            let unique = if *count == 0 {
                name.clone()
            } else {
                format!("{name}_{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}
