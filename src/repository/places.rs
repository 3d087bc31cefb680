//! Points of interest catalogue

use once_cell::sync::Lazy;

use crate::models::place::{Place, PlaceKind};

#[allow(clippy::too_many_arguments)]
fn place(
    id: u32,
    name: &str,
    (lat, lng): (f64, f64),
    kind: PlaceKind,
    category: &str,
    description: &str,
    rating: f64,
    price: &str,
    hours: &str,
) -> Place {
    Place {
        id,
        name: name.to_string(),
        lat,
        lng,
        kind,
        category: category.to_string(),
        description: description.to_string(),
        rating,
        price: price.to_string(),
        hours: hours.to_string(),
        cuisine: None,
        ar_model: None,
        vr_tour: None,
    }
}

fn with_media(mut p: Place, ar_model: &str, vr_tour: &str) -> Place {
    p.ar_model = Some(ar_model.to_string());
    p.vr_tour = Some(vr_tour.to_string());
    p
}

fn with_cuisine(mut p: Place, cuisine: &str) -> Place {
    p.cuisine = Some(cuisine.to_string());
    p
}

static PLACES: Lazy<Vec<Place>> = Lazy::new(|| {
    use PlaceKind::*;

    vec![
        with_media(
            place(1, "Betla National Park", (23.9167, 84.1167), Attraction, "wildlife",
                "Famous for tigers, elephants, and diverse wildlife", 4.8, "₹100", "6:00 AM - 6:00 PM"),
            "betla-park-model.glb",
            "betla-park-tour",
        ),
        with_media(
            place(2, "Netarhat Hill Station", (23.4833, 84.2667), Attraction, "nature",
                "Queen of Chotanagpur with scenic beauty", 4.6, "Free", "24/7"),
            "netarhat-model.glb",
            "netarhat-tour",
        ),
        with_media(
            place(3, "Hazaribagh Wildlife Sanctuary", (24.0, 85.35), Attraction, "wildlife",
                "Bird watching paradise with diverse flora and fauna", 4.5, "₹50", "6:00 AM - 5:00 PM"),
            "hazaribagh-model.glb",
            "hazaribagh-tour",
        ),
        with_media(
            place(4, "Ranchi Waterfalls", (23.3441, 85.3096), Attraction, "nature",
                "Beautiful waterfalls including Hundru and Jonha Falls", 4.4, "Free", "6:00 AM - 6:00 PM"),
            "ranchi-falls-model.glb",
            "ranchi-falls-tour",
        ),
        with_media(
            place(5, "Jagannath Temple, Ranchi", (23.3441, 85.3096), Attraction, "culture",
                "Ancient temple with beautiful architecture", 4.3, "Free", "5:00 AM - 9:00 PM"),
            "jagannath-temple-model.glb",
            "jagannath-temple-tour",
        ),
        with_cuisine(
            place(6, "Tribal Food Court", (23.3441, 85.3096), Restaurant, "food",
                "Authentic tribal cuisine and local delicacies", 4.5, "₹200-400", "11:00 AM - 10:00 PM"),
            "Tribal",
        ),
        with_cuisine(
            place(7, "Jharkhandi Thali", (22.8046, 86.2029), Restaurant, "food",
                "Traditional Jharkhand thali with local flavors", 4.4, "₹150-300", "12:00 PM - 9:00 PM"),
            "Jharkhandi",
        ),
        with_cuisine(
            place(8, "Forest Cafe", (23.9167, 84.1167), Restaurant, "food",
                "Organic food near Betla National Park", 4.6, "₹300-500", "7:00 AM - 8:00 PM"),
            "Organic",
        ),
        place(9, "Ranchi Railway Station", (23.3441, 85.3096), Transport, "station",
            "Main railway station connecting Jharkhand", 4.2, "Varies", "24/7"),
        place(10, "Jamshedpur Railway Station", (22.8046, 86.2029), Transport, "station",
            "Steel city railway station", 4.3, "Varies", "24/7"),
        place(11, "Birsa Munda Airport", (23.3142, 85.3213), Transport, "airport",
            "Domestic airport serving Ranchi", 4.1, "Varies", "6:00 AM - 10:00 PM"),
    ]
});

/// Read-only access to the bundled catalogue
#[derive(Clone, Default)]
pub struct PlacesRepository;

impl PlacesRepository {
    pub fn new() -> Self {
        Self
    }

    /// All places, or only those of `kind`
    pub fn list(&self, kind: Option<PlaceKind>) -> Vec<Place> {
        PLACES
            .iter()
            .filter(|p| kind.map_or(true, |k| p.kind == k))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<Place> {
        PLACES.iter().find(|p| p.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_counts() {
        let repo = PlacesRepository::new();
        assert_eq!(repo.list(None).len(), 11);
        assert_eq!(repo.list(Some(PlaceKind::Attraction)).len(), 5);
        assert_eq!(repo.list(Some(PlaceKind::Restaurant)).len(), 3);
        assert_eq!(repo.list(Some(PlaceKind::Transport)).len(), 3);
    }

    #[test]
    fn test_get() {
        let repo = PlacesRepository::new();
        let cafe = repo.get(8).unwrap();
        assert_eq!(cafe.cuisine.as_deref(), Some("Organic"));
        assert!(repo.get(99).is_none());
    }
}
