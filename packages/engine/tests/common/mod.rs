#![allow(dead_code)]

use impostor_engine::{Category, Phase, Player, PlayerColor, SessionFlow, Step};

#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub fn players(count: usize) -> Vec<Player> {
    engine_test_support::roster::named(count)
        .into_iter()
        .map(|(id, name, color)| Player::new(id, name, PlayerColor::new(color)))
        .collect()
}

pub fn food() -> Category {
    Category::new("food", "Food")
        .with_items(["Pizza"])
        .with_hints(["Food"])
}

/// Pass the phone through every reveal and land in Discussion.
pub fn finish_reveal(flow: &mut SessionFlow) {
    loop {
        match flow.advance().expect("reveal advance") {
            Step::Entered(Phase::Discussion) => return,
            Step::Moved { .. } => {}
            other => panic!("unexpected step {other:?}"),
        }
    }
}
