#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rookery::{Game, Setup, Square};

#[derive(Debug, Arbitrary)]
struct Data<'a> {
    setup: &'a [u8],
    from: Square,
    to: Square,
}

fuzz_target!(|data: Data<'_>| {
    let Some(game) = Setup::from_ascii(data.setup)
        .ok()
        .and_then(|setup| Game::from_setup(setup).ok())
    else {
        return;
    };

    let legals = game.legal_moves();
    let listed = legals
        .iter()
        .any(|m| m.from() == data.from && m.to() == data.to);
    assert_eq!(listed, game.is_legal(data.from, data.to));
    assert!(legals.iter().all(|m| game.is_legal(m.from(), m.to())));

    let before = game.clone();
    let mut after = game.clone();
    if after.submit_move(data.from, data.to).is_err() {
        assert_eq!(after, before);
    }
});
