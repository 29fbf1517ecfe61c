use crate::constants::SELECTION_PLACEHOLDER;
use crate::models::Product;

/// The user's chosen products, in the order they were picked, unique by name.
#[derive(Debug, Clone, Default)]
pub struct SelectedProducts {
    products: Vec<Product>,
}

impl SelectedProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `product`. Returns `true` when it is now selected.
    pub fn toggle(&mut self, product: &Product) -> bool {
        match self.position(&product.name) {
            Some(idx) => {
                self.products.remove(idx);
                false
            }
            None => {
                self.products.push(product.clone());
                true
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Product> {
        self.position(name).map(|idx| self.products.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, idx: usize) -> Option<&Product> {
        self.products.get(idx)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }
}

/// Lines for the selected-products panel. The placeholder appears only when nothing is selected.
pub fn selection_lines(selected: &SelectedProducts) -> Vec<String> {
    if selected.is_empty() {
        return vec![SELECTION_PLACEHOLDER.to_string()];
    }
    selected
        .iter()
        .map(|p| format!("{} — {}", p.name, p.brand))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            brand: "La Roche-Posay".to_string(),
            category: "suncare".to_string(),
            description: "SPF 50".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selected = SelectedProducts::new();
        let anthelios = product("Anthelios");

        assert!(selected.toggle(&anthelios));
        assert!(selected.contains("Anthelios"));
        assert!(!selected.toggle(&anthelios));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_prior_order() {
        let mut selected = SelectedProducts::new();
        selected.toggle(&product("A"));
        selected.toggle(&product("B"));

        selected.toggle(&product("C"));
        selected.toggle(&product("C"));

        let names: Vec<_> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_same_name_is_same_product() {
        let mut selected = SelectedProducts::new();
        selected.toggle(&product("Duplicate"));
        let mut other = product("Duplicate");
        other.brand = "Someone Else".to_string();

        assert!(!selected.toggle(&other));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_remove_by_name() {
        let mut selected = SelectedProducts::new();
        selected.toggle(&product("A"));
        selected.toggle(&product("B"));

        assert_eq!(selected.remove("A").map(|p| p.name), Some("A".to_string()));
        assert!(selected.remove("A").is_none());
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_placeholder_only_when_empty() {
        let mut selected = SelectedProducts::new();
        assert_eq!(selection_lines(&selected), vec![SELECTION_PLACEHOLDER]);

        selected.toggle(&product("A"));
        let lines = selection_lines(&selected);
        assert_eq!(lines, vec!["A — La Roche-Posay"]);
        assert!(!lines.iter().any(|l| l == SELECTION_PLACEHOLDER));
    }
}
