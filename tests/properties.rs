use canvas_arcade::consts::*;
use canvas_arcade::sim::{
    Direction, GamePhase, JumpConfig, JumpInput, JumpState, SnakeConfig, SnakeState,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn jump_input() -> impl Strategy<Value = JumpInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| JumpInput { left, right })
}

proptest! {
    #[test]
    fn snake_never_reverses(seed in any::<u64>(), turns in prop::collection::vec(direction(), 1..60)) {
        let mut state = SnakeState::new(SnakeConfig::default(), seed);
        for turn in turns {
            let before = state.direction;
            state.steer(turn);
            state.tick();
            prop_assert!(!before.is_opposite(state.direction));
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn snake_length_changes_only_when_eating(seed in any::<u64>(), turns in prop::collection::vec(direction(), 1..80)) {
        let mut state = SnakeState::new(SnakeConfig::default(), seed);
        for turn in turns {
            state.steer(turn);
            let len = state.len();
            let target = state.head() + state.velocity();
            let eats = state.food == Some(target);
            if state.tick().terminated {
                break;
            }
            let expected = if eats { len + 1 } else { len };
            prop_assert_eq!(state.len(), expected);
        }
    }

    #[test]
    fn food_never_on_snake(seed in any::<u64>(), turns in prop::collection::vec(direction(), 1..80)) {
        // Small board so the snake eats often
        let config = SnakeConfig { width: 100, height: 100, ..Default::default() };
        let mut state = SnakeState::new(config, seed);
        for turn in turns {
            state.steer(turn);
            if state.tick().terminated {
                break;
            }
            if let Some(food) = state.food {
                prop_assert!(!state.segments.contains(&food));
                prop_assert_eq!(food.x % GRID_SIZE, 0);
                prop_assert_eq!(food.y % GRID_SIZE, 0);
                prop_assert!(food.x >= 0 && food.x < 100 && food.y >= 0 && food.y < 100);
            }
        }
    }

    #[test]
    fn player_wraps_past_right_edge(seed in any::<u64>(), over in 0.01f32..30.0) {
        let mut state = JumpState::new(JumpConfig::default(), seed);
        state.player.rect.pos.x = JUMP_WIDTH + over;
        state.tick(&JumpInput::default());
        prop_assert_eq!(state.player.rect.pos.x, -PLAYER_SIZE);
    }

    #[test]
    fn jump_score_never_decreases(seed in any::<u64>(), inputs in prop::collection::vec(jump_input(), 1..400)) {
        let mut state = JumpState::new(JumpConfig::default(), seed);
        let mut score = state.score;
        let mut offset = state.scroll_offset;
        for input in inputs {
            if state.tick(&input).terminated {
                break;
            }
            prop_assert!(state.score >= score);
            prop_assert!(state.scroll_offset >= offset);
            if state.scroll_offset == offset {
                prop_assert_eq!(state.score, score);
            }
            prop_assert_eq!(state.score, (state.scroll_offset / SCROLL_PER_POINT).floor() as u32);
            score = state.score;
            offset = state.scroll_offset;
        }
    }

    #[test]
    fn platforms_stay_on_screen_and_ahead(seed in any::<u64>(), inputs in prop::collection::vec(jump_input(), 1..300)) {
        let mut state = JumpState::new(JumpConfig::default(), seed);
        for input in inputs {
            if state.tick(&input).terminated {
                break;
            }
            prop_assert!(!state.platforms.is_empty());
            prop_assert!(state.platforms.iter().all(|p| p.rect.top() < JUMP_HEIGHT));
            let highest = state.platforms.iter().map(|p| p.rect.top()).fold(f32::MAX, f32::min);
            prop_assert!(highest <= -SPAWN_AHEAD);
        }
    }
}
