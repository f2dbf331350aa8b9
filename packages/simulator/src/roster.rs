//! Table setup: simulated players and the built-in category catalog.

use impostor_engine::{Category, CategoryCatalog, InMemoryCatalog, Player, PlayerColor};

use crate::error::SimulatorError;

const CATALOG_JSON: &str = include_str!("catalog.json");

const COLORS: [&str; 6] = ["red", "blue", "green", "yellow", "purple", "orange"];

pub fn catalog() -> Result<InMemoryCatalog, SimulatorError> {
    Ok(InMemoryCatalog::from_json(CATALOG_JSON)?)
}

/// Colors come from the palette; later laps round the table get a suffix
/// so every token stays unique.
pub fn players(count: usize) -> Vec<Player> {
    (1..=count)
        .map(|n| {
            let lap = (n - 1) / COLORS.len();
            let color = COLORS[(n - 1) % COLORS.len()];
            let token = if lap == 0 {
                color.to_string()
            } else {
                format!("{color}-{}", lap + 1)
            };
            Player::new(n as u32, format!("Player {n}"), PlayerColor::new(token))
        })
        .collect()
}

/// Players plus a playable category, ready for `SessionFlow::start`.
pub fn table(count: usize, category_id: &str) -> Result<(Vec<Player>, Category), SimulatorError> {
    let catalog = catalog()?;
    let category = catalog.resolve(category_id)?.clone();
    Ok((players(count), category))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use impostor_engine::{DomainError, ValidationKind};

    #[test]
    fn builtin_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.available().len(), 3);
    }

    #[test]
    fn locked_category_is_refused() {
        assert!(matches!(
            table(4, "movies"),
            Err(SimulatorError::Domain(DomainError::Validation(
                ValidationKind::CategoryLocked,
                _
            )))
        ));
    }

    #[test]
    fn colors_stay_unique_past_the_palette() {
        let players = players(13);
        let colors: HashSet<String> = players.iter().map(|p| p.color.to_string()).collect();
        assert_eq!(colors.len(), 13);
        assert_eq!(players[0].color.to_string(), "red");
        assert_eq!(players[6].color.to_string(), "red-2");
        assert_eq!(players[12].color.to_string(), "red-3");
        assert_eq!(players[12].id, 13);
    }
}
