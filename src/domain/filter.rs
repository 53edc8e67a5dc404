//! Filter countries, people and animals by animal name.
//!
//! Filtering works inner-to-outer: animals are matched against the pattern,
//! people without surviving animals are dropped, countries without surviving
//! people are dropped. Surviving records are rebuilt, never mutated in place.

use tracing::{debug, trace};

use crate::domain::entities::{annotated_name, Animal, Country, Person};

impl Person {
    /// Copy of this person keeping only matching animals, `None` if none match.
    ///
    /// With `annotate`, the name gets the surviving animal count appended.
    pub fn filtered(&self, pattern: &str, annotate: bool) -> Option<Person> {
        let animals: Vec<Animal> = self
            .animals
            .iter()
            .filter(|animal| animal.matches(pattern))
            .cloned()
            .collect();

        if animals.is_empty() {
            trace!(person = %self.name, "no matching animals, dropped");
            return None;
        }

        let name = if annotate {
            annotated_name(&self.name, animals.len())
        } else {
            self.name.clone()
        };
        Some(Person { name, animals })
    }
}

impl Country {
    /// Copy of this country keeping only people with matching animals,
    /// `None` if nobody survives.
    pub fn filtered(&self, pattern: &str, annotate: bool) -> Option<Country> {
        let people: Vec<Person> = self
            .people
            .iter()
            .filter_map(|person| person.filtered(pattern, annotate))
            .collect();

        if people.is_empty() {
            trace!(country = %self.name, "no surviving people, dropped");
            return None;
        }

        let name = if annotate {
            annotated_name(&self.name, people.len())
        } else {
            self.name.clone()
        };
        Some(Country { name, people })
    }
}

/// Filter `data` down to animals whose name contains `pattern`.
///
/// The result is a new tree in input order; `data` is left untouched.
/// With `annotate`, country and person names carry their survivor counts,
/// e.g. `"Satanwi [1]"`. Animal names are never annotated.
pub fn filter_count_data(pattern: &str, annotate: bool, data: &[Country]) -> Vec<Country> {
    let result: Vec<Country> = data
        .iter()
        .filter_map(|country| country.filtered(pattern, annotate))
        .collect();
    debug!(
        pattern,
        annotate,
        countries_in = data.len(),
        countries_out = result.len(),
        "filtered dataset"
    );
    result
}
