use std::collections::HashMap;

/// Header row recovered from a worksheet whose columns are not guaranteed
/// uniquely named. The first occurrence of a name wins; later occurrences
/// get a deterministic numeric suffix ("name", "name_2", "name_3", …)
/// instead of raising.
#[derive(Debug)]
pub(crate) struct HeaderModel(pub(crate) Vec<String>);

impl HeaderModel {
    pub(crate) fn disambiguate(headers: &[String]) -> Self {
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        let names = headers
            .iter()
            .map(|name| {
                let count = occurrences.entry(name.as_str()).or_insert(0);
                *count += 1;
                if *count == 1 {
                    name.clone()
                } else {
                    format!("{}_{}", name, *count)
                }
            })
            .collect();
        HeaderModel(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn unique_headers_pass_through() {
        let model = HeaderModel::disambiguate(&headers(&["id", "name", "amount"]));
        assert_eq!(model.0, headers(&["id", "name", "amount"]));
    }

    #[test]
    fn duplicates_get_numeric_suffixes() {
        let model = HeaderModel::disambiguate(&headers(&["id", "name", "name", "name"]));
        assert_eq!(model.0, headers(&["id", "name", "name_2", "name_3"]));
    }

    #[test]
    fn suffixing_is_deterministic_per_name() {
        let model = HeaderModel::disambiguate(&headers(&["a", "b", "a", "b"]));
        assert_eq!(model.0, headers(&["a", "b", "a_2", "b_2"]));
    }
}
