#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

pub const CITIES: &[City] = &[
    City {
        id: "dublin",
        name: "Dublin",
        country: "Ireland",
    },
    City {
        id: "london",
        name: "London",
        country: "United Kingdom",
    },
    City {
        id: "newyork",
        name: "New York",
        country: "United States",
    },
    City {
        id: "dubai",
        name: "Dubai",
        country: "United Arab Emirates",
    },
];

impl City {
    /// Look up a city by id or display name, ignoring case.
    pub fn find(query: &str) -> Option<City> {
        let q = query.trim();
        CITIES
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(q) || c.name.eq_ignore_ascii_case(q))
            .copied()
    }

    pub fn position(&self) -> usize {
        CITIES.iter().position(|c| c.id == self.id).unwrap_or(0)
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

impl Default for City {
    fn default() -> Self {
        CITIES[0]
    }
}
