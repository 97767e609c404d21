//! Restaurant request entity for the add-a-spot flow.

/// A request to add a new restaurant to the catalog.
///
/// Requests are not persisted. They are validated and forwarded to the
/// configured notification channel; the catalog itself is untouched.
#[derive(Debug, Clone)]
pub struct RestaurantRequest {
    pub name: String,
    pub location: String,
    pub link: Option<String>,
}

impl RestaurantRequest {
    /// Creates a new RestaurantRequest instance.
    pub fn new(name: String, location: String, link: Option<String>) -> Self {
        Self {
            name,
            location,
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_creation() {
        let request = RestaurantRequest::new(
            "Howdy Hot Chicken".to_string(),
            "Houston, TX".to_string(),
            Some("https://howdyhotchicken.com".to_string()),
        );

        assert_eq!(request.name, "Howdy Hot Chicken");
        assert_eq!(request.location, "Houston, TX");
        assert!(request.link.is_some());
    }

    #[test]
    fn test_request_without_link() {
        let request = RestaurantRequest::new("Spot".to_string(), "Katy, TX".to_string(), None);
        assert!(request.link.is_none());
    }
}
