use glam::Vec2;
use proptest::prelude::*;

use star_volley::Tuning;
use star_volley::sim::{
    DifficultyCurve, GameState, ManualClock, ScriptedRandom, TickInput, corner_hit, motion, tick,
};

fn direction() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(left, right)| TickInput {
        left,
        right,
        ..Default::default()
    })
}

proptest! {
    #[test]
    fn difficulty_never_speeds_back_up(a in 0u32..2_000, b in 0u32..2_000) {
        let curve = DifficultyCurve::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.spawn_interval_ms(low) >= curve.spawn_interval_ms(high));
    }

    #[test]
    fn player_stays_on_field(
        start in 0.0f32..=360.0,
        inputs in prop::collection::vec(direction(), 1..300),
    ) {
        let mut state = GameState::default();
        state.player.pos.x = start;
        for input in &inputs {
            motion::steer_player(&mut state, input);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= 360.0);
        }
    }

    #[test]
    fn idle_ticks_leave_player_alone(start in 0.0f32..=360.0, ticks in 1usize..200) {
        let clock = ManualClock::new();
        let mut rng = ScriptedRandom::new([0]);
        let mut state = GameState::default();
        state.player.pos.x = start;
        for _ in 0..ticks {
            clock.advance(16);
            tick(&mut state, &TickInput::default(), &clock, &mut rng);
        }
        prop_assert_eq!(state.player.pos.x, start);
    }

    #[test]
    fn motion_uses_fixed_steps(
        shots in prop::collection::vec((0i32..400, 10i32..600), 0..20),
        enemies in prop::collection::vec((0i32..360, 50i32..560), 0..20),
    ) {
        let mut state = GameState::default();
        state.enemies.clear();
        for &(x, y) in &shots {
            state.spawn_projectile_at(Vec2::new(x as f32, y as f32));
        }
        for &(x, y) in &enemies {
            let id = state.spawn_enemy_at(x as f32);
            if let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == id) {
                enemy.pos.y = y as f32;
            }
        }

        motion::integrate(&mut state);

        prop_assert!(!state.is_game_over());
        for (projectile, &(_, y)) in state.projectiles.iter().zip(&shots) {
            prop_assert_eq!(projectile.pos.y, y as f32 - 8.0);
        }
        for (enemy, &(_, y)) in state.enemies.iter().zip(&enemies) {
            prop_assert_eq!(enemy.pos.y, y as f32 + 1.0);
        }
    }

    #[test]
    fn corner_inside_box_hits(ex in 0i32..360, ey in 50i32..520, dx in 1i32..40, dy in 1i32..40) {
        let enemy = Vec2::new(ex as f32, ey as f32);
        let shot = enemy + Vec2::new(dx as f32, dy as f32);
        prop_assert!(corner_hit(shot, enemy, 40.0));
    }

    #[test]
    fn corner_outside_box_misses(
        ex in 0i32..360,
        ey in 50i32..520,
        dx in -60i32..100,
        dy in -60i32..100,
    ) {
        prop_assume!(!(1..40).contains(&dx) || !(1..40).contains(&dy));
        let enemy = Vec2::new(ex as f32, ey as f32);
        let shot = enemy + Vec2::new(dx as f32, dy as f32);
        prop_assert!(!corner_hit(shot, enemy, 40.0));
    }

    #[test]
    fn tuning_accepts_ordered_curves(
        base in 100u64..5_000,
        cuts in prop::collection::vec(0u64..50, 0..8),
    ) {
        let mut steps = Vec::new();
        let mut interval = base;
        for (i, cut) in cuts.iter().enumerate() {
            interval = interval.saturating_sub(*cut);
            steps.push(star_volley::sim::DifficultyStep {
                min_score: (i as u32 + 1) * 100,
                spawn_interval_ms: interval,
            });
        }
        let tuning = Tuning {
            difficulty: DifficultyCurve { base_interval_ms: base, steps },
            ..Tuning::default()
        };
        prop_assert!(tuning.validate().is_ok());
    }
}
