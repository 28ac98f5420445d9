//! Property tests across the pipeline

use proptest::prelude::*;
use waymark_engine::validator::WHAT;
use waymark_engine::{CommandValidator, MemoryPersistence};
use waymark_foundation::{Direction, RoomId, Stat, Stats};
use waymark_parser::{CommandParser, Normaliser};
use waymark_runtime::demo::demo_pack;
use waymark_storage::Player;

use crate::{VERBS, engine, open_grid};

fn compass() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::COMPASS.to_vec())
}

proptest! {
    #[test]
    fn single_synonyms_expand_before_tokenizing(
        (raw, canonical) in prop::sample::select(vec![
            ("u", "go up"),
            ("north", "n"),
            ("OUT", "go out"),
            ("down", "go down"),
            (" i ", "go in"),
            ("West", "w"),
        ])
    ) {
        prop_assert_eq!(Normaliser::canonical(raw), canonical);
    }

    #[test]
    fn unknown_verbs_are_one_past_the_table(verb in "[a-z]{2,8}", noun in prop::option::of("[a-z]{2,8}")) {
        prop_assume!(!VERBS.contains(&verb.as_str()));
        prop_assume!(!["in", "up", "out", "down", "exit", "enter", "inside", "outside", "north", "south", "east", "west"].contains(&verb.as_str()));
        let pack = open_grid();
        let vocabulary = pack.vocabulary().unwrap();
        let raw = match &noun {
            Some(noun) => format!("{verb} {noun}"),
            None => verb.clone(),
        };
        let command = CommandParser::new(&vocabulary).parse(&raw, RoomId::new(15));
        prop_assert_eq!(command.verb().get() as usize, VERBS.len() + 1);

        let message = CommandValidator::rejection(&command, &vocabulary).unwrap();
        if command.noun().is_unresolved() {
            prop_assert_eq!(message, WHAT);
        } else {
            prop_assert_eq!(message, format!("You can't {raw}"));
        }
    }

    #[test]
    fn moves_follow_the_grid(room in 11u32..=20, direction in compass()) {
        let mut engine = engine(open_grid());
        engine.set_room(RoomId::new(room)).unwrap();
        let letter = direction.name()[..1].to_lowercase();
        engine.process_command(&letter);

        let to = RoomId::new(room).offset(direction.modifier().unwrap());
        let open = engine.room_exits(RoomId::new(room)).unwrap()[direction.exit_index().unwrap()];
        if open {
            prop_assert_eq!(Some(engine.current_room()), to);
            prop_assert!(engine.room_visited(engine.current_room()).unwrap());
        } else {
            prop_assert_eq!(engine.current_room(), RoomId::new(room));
            prop_assert_eq!(engine.messages(), ["You can't go that way"]);
        }
    }

    #[test]
    fn reduce_stat_never_goes_negative(start in 0.0f64..50.0, times in 0usize..60) {
        let mut player = Player::new(RoomId::new(1), Stats::new().with(Stat::Weight, start));
        for _ in 0..times {
            player.reduce_stat(Stat::Weight);
        }
        #[allow(clippy::cast_precision_loss)]
        let expected = (start - times as f64).max(0.0);
        prop_assert!((player.stat(Stat::Weight) - expected).abs() < 1e-9);
    }

    #[test]
    fn turn_update_is_unclamped(start in 0.0f64..5.0, turns in 0usize..20) {
        let mut player = Player::new(RoomId::new(1), Stats::new().with(Stat::TimeRemaining, start));
        for _ in 0..turns {
            player.turn_update_stats();
        }
        #[allow(clippy::cast_precision_loss)]
        let expected = start - turns as f64;
        prop_assert!((player.stat(Stat::TimeRemaining) - expected).abs() < 1e-9);
    }

    #[test]
    fn every_input_yields_one_result(raw in "[a-z ]{0,20}") {
        let pack = demo_pack();
        let mut processor = waymark_engine::CommandProcessor::new(pack.vocabulary().unwrap(), 3);
        let game = pack.build_game().unwrap();
        let player = Player::new(RoomId::new(1), Stats::new());
        let result = processor.execute(&raw, game, player, &mut MemoryPersistence::new());
        prop_assert!(!result.game.messages().is_empty());
    }
}
