#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{Position, Rect, SimTime};

    /// Verify the wire enums round-trip through serde_json.
    #[test]
    fn test_enemy_tier_serde() {
        let variants = vec![EnemyTier::Tier1, EnemyTier::Tier2, EnemyTier::Tier3];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyTier = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_entity_kind_serde() {
        let variants = vec![
            EntityKind::Ship,
            EntityKind::Enemy,
            EntityKind::Shot,
            EntityKind::Bomb,
            EntityKind::HouseBlock,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_player_command_serde_tagged() {
        let cmd = PlayerCommand::SetShipTarget {
            x: 120.5,
            pace: MovePace::Track,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetShipTarget\""), "got {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            PlayerCommand::SetShipTarget {
                pace: MovePace::Track,
                ..
            }
        ));

        let json = serde_json::to_string(&PlayerCommand::FireShot).unwrap();
        assert!(json.contains("\"type\":\"FireShot\""));
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EntitySpawned {
                id: 7,
                kind: EntityKind::Shot,
                position: Position::new(0.0, -517.0),
            },
            GameEvent::EntityDestroyed {
                id: 7,
                kind: EntityKind::Shot,
            },
            GameEvent::ScoreChanged { score: 30 },
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.score, 0);
        assert_eq!(back.house_impacts, [0; HOUSE_COUNT]);
    }

    // ---- Tier scoring ----

    #[test]
    fn test_tier_points_descend_with_tier() {
        assert_eq!(EnemyTier::Tier1.points(), TIER1_POINTS);
        assert_eq!(EnemyTier::Tier2.points(), TIER2_POINTS);
        assert_eq!(EnemyTier::Tier3.points(), TIER3_POINTS);
        assert!(EnemyTier::Tier1.points() > EnemyTier::Tier2.points());
        assert!(EnemyTier::Tier2.points() > EnemyTier::Tier3.points());
    }

    #[test]
    fn test_move_pace_durations() {
        assert_eq!(MovePace::Reposition.duration_secs(), SHIP_REPOSITION_SECS);
        assert_eq!(MovePace::Track.duration_secs(), SHIP_TRACK_SECS);
        assert!(MovePace::Track.duration_secs() < MovePace::Reposition.duration_secs());
    }

    // ---- Geometry ----

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(Position::new(10.0, 20.0), 36.0, 24.0);
        assert!(rect.contains(Position::new(10.0, 20.0)));
        assert!(rect.contains(Position::new(28.0, 20.0)), "edge is inclusive");
        assert!(!rect.contains(Position::new(28.1, 20.0)));
        assert!(rect.contains(Position::new(10.0, 32.0)));
        assert!(!rect.contains(Position::new(10.0, 32.1)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(Position::new(0.0, 0.0), 10.0, 10.0);
        let b = Rect::new(Position::new(9.0, 0.0), 10.0, 10.0);
        let c = Rect::new(Position::new(20.0, 0.0), 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_intersects_is_separable_per_axis() {
        let a = Rect::new(Position::new(0.0, 0.0), 10.0, 10.0);
        // Overlapping in x but far apart in y.
        let b = Rect::new(Position::new(2.0, 50.0), 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-9,
            "one tick-rate's worth of ticks should be 1.0s, got {}",
            time.elapsed_secs
        );
    }

    // ---- Constant sanity ----

    #[test]
    fn test_formation_geometry_constants() {
        assert_eq!(ENEMY_ROWS, 5);
        assert_eq!(ENEMY_COLUMNS, 9);
        assert_eq!(HOUSE_COUNT, 4);
        assert_eq!(HOUSE_GRID * HOUSE_GRID, 9);
        assert_eq!(HOUSE_ROW_HEIGHTS.len(), HOUSE_GRID);
        assert!(FORMATION_SPEED >= 0.0);
        assert!(PROJECTILE_Y_LIMIT > 0.0);
    }
}
