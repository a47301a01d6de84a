//! Unit tests for ud-core primitives.

#[cfg(test)]
mod vec3 {
    use crate::Vec3;

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1, 2, 3);
        let b = Vec3::new(-1, 0, 2);
        assert_eq!(a + b, Vec3::new(0, 2, 5));
        assert_eq!(a - b, Vec3::new(2, 2, 1));
        assert_eq!(-b, Vec3::new(1, 0, -2));
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vec3::new(0, 1, 0).dot(Vec3::new(0, 1, 0)), 1);
        assert_eq!(Vec3::new(1, 0, 0).dot(Vec3::new(0, 1, 0)), 0);
    }

    #[test]
    fn zero_sentinel() {
        assert!(Vec3::ZERO.is_zero());
        assert!(!Vec3::new(0, 0, 1).is_zero());
    }
}

#[cfg(test)]
mod direction {
    use crate::{DIRECTIONS, Direction, Vec3};

    #[test]
    fn canonical_order() {
        let vecs: Vec<Vec3> = DIRECTIONS.iter().map(|d| d.vec()).collect();
        assert_eq!(
            vecs,
            vec![
                Vec3::new(0, 1, 0),
                Vec3::new(0, 0, 1),
                Vec3::new(-1, 0, 0),
                Vec3::new(0, -1, 0),
                Vec3::new(0, 0, -1),
                Vec3::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn succ_cycle() {
        assert_eq!(Direction::Right.succ(), Direction::Up);
        assert_eq!(Direction::Up.succ(), Direction::Forward);
        assert_eq!(Direction::Forward.succ(), Direction::Left);
        assert_eq!(Direction::Left.succ(), Direction::Down);
        assert_eq!(Direction::Down.succ(), Direction::Back);
        assert_eq!(Direction::Back.succ(), Direction::Right);
    }

    #[test]
    fn opposite_is_three_steps() {
        for d in DIRECTIONS {
            assert_eq!(d.succ().succ().succ(), d.opposite());
            assert_eq!(d.opposite().vec(), -d.vec());
        }
    }

    #[test]
    fn compatible_set_is_perpendicular() {
        let compat = Direction::Up.compatible();
        assert_eq!(
            compat,
            [Direction::Forward, Direction::Left, Direction::Back, Direction::Right]
        );
        for d in DIRECTIONS {
            for c in d.compatible() {
                assert_eq!(c.vec().dot(d.vec()), 0, "{c} not perpendicular to {d}");
            }
        }
    }

    #[test]
    fn from_vec_roundtrip() {
        for d in DIRECTIONS {
            assert_eq!(Direction::from_vec(d.vec()), Some(d));
        }
        assert_eq!(Direction::from_vec(Vec3::ZERO), None);
        assert_eq!(Direction::from_vec(Vec3::new(1, 1, 0)), None);
    }

    #[test]
    fn orthogonality_to_vertical_axis() {
        let up = Vec3::new(0, 1, 0);
        let lateral: Vec<Direction> =
            DIRECTIONS.into_iter().filter(|d| d.is_orthogonal_to(up)).collect();
        assert_eq!(
            lateral,
            vec![Direction::Forward, Direction::Left, Direction::Back, Direction::Right]
        );
    }
}

#[cfg(test)]
mod cell {
    use crate::{CellKind, CellState};

    #[test]
    fn render_codes_are_stable() {
        assert_eq!(CellKind::Empty.code(), 0);
        assert_eq!(CellKind::Wall.code(), 1);
        assert_eq!(CellKind::ActiveRobot.code(), 2);
        assert_eq!(CellKind::SettledRobot.code(), 3);
        assert_eq!(CellKind::Door.code(), 4);
        assert_eq!(CellKind::SleepingRobot.code(), 5);
    }

    #[test]
    fn wall_predicate() {
        assert!(CellState::Wall.is_wall());
        assert!(!CellState::Occupied.is_wall());
        assert!(!CellState::Free.is_wall());
    }
}

#[cfg(test)]
mod neighborhood {
    use crate::{CellState, Direction, Neighborhood};

    #[test]
    fn center_index_is_13() {
        assert_eq!(Neighborhood::index_of(0, 0, 0), Neighborhood::CENTER);
        assert_eq!(Neighborhood::CENTER, 13);
    }

    #[test]
    fn direction_indices() {
        assert_eq!(Neighborhood::index_of(0, 1, 0), 16); // up
        assert_eq!(Neighborhood::index_of(0, -1, 0), 10); // down
        assert_eq!(Neighborhood::index_of(-1, 0, 0), 4); // left
        assert_eq!(Neighborhood::index_of(1, 0, 0), 22); // right
        assert_eq!(Neighborhood::index_of(0, 0, 1), 14); // forward
        assert_eq!(Neighborhood::index_of(0, 0, -1), 12); // back
    }

    #[test]
    fn dir_accessor_matches_rel() {
        let mut n = Neighborhood::filled(CellState::Free);
        n.set_rel(0, 1, 0, CellState::Wall);
        assert_eq!(n.dir(Direction::Up), CellState::Wall);
        assert_eq!(n.dir(Direction::Down), CellState::Free);
    }

    #[test]
    fn lids_closed_walls_both_horizontal_layers() {
        let open = Neighborhood::filled(CellState::Free);
        let closed = open.with_lids_closed();
        for dx in -1..=1 {
            for dz in -1..=1 {
                assert_eq!(closed.rel(dx, 1, dz), CellState::Wall);
                assert_eq!(closed.rel(dx, -1, dz), CellState::Wall);
                assert_eq!(closed.rel(dx, 0, dz), open.rel(dx, 0, dz));
            }
        }
    }

    #[test]
    fn center_walled_changes_only_center() {
        let open = Neighborhood::filled(CellState::Free);
        let walled = open.with_center_walled();
        assert_eq!(walled.at(Neighborhood::CENTER), CellState::Wall);
        for i in 0..27 {
            if i != Neighborhood::CENTER {
                assert_eq!(walled.at(i), open.at(i));
            }
        }
    }
}

#[cfg(test)]
mod reachability {
    use crate::{CellState, Neighborhood};

    fn idx(dx: i32, dy: i32, dz: i32) -> usize {
        Neighborhood::index_of(dx, dy, dz)
    }

    #[test]
    fn wall_endpoints_unreachable() {
        let mut n = Neighborhood::filled(CellState::Free);
        n.set_rel(1, 0, 0, CellState::Wall);
        assert!(!n.reachable(idx(1, 0, 0), idx(0, 0, 0)));
        assert!(!n.reachable(idx(0, 0, 0), idx(1, 0, 0)));
    }

    #[test]
    fn same_cell_trivially_reachable() {
        let n = Neighborhood::filled(CellState::Free);
        assert!(n.reachable(idx(-1, -1, -1), idx(-1, -1, -1)));
    }

    #[test]
    fn occupied_cells_are_traversable() {
        let mut n = Neighborhood::filled(CellState::Wall);
        n.set_rel(1, 0, 0, CellState::Free);
        n.set_rel(0, 0, 0, CellState::Occupied);
        n.set_rel(0, 0, -1, CellState::Free);
        // right → center → back, passing through the occupied center.
        assert!(n.reachable(idx(1, 0, 0), idx(0, 0, -1)));
    }

    #[test]
    fn removing_the_bridge_disconnects() {
        let mut n = Neighborhood::filled(CellState::Wall);
        n.set_rel(1, 0, 0, CellState::Free);
        n.set_rel(0, 0, 0, CellState::Free);
        n.set_rel(0, 0, -1, CellState::Free);
        assert!(n.reachable(idx(1, 0, 0), idx(0, 0, -1)));
        let walled = n.with_center_walled();
        assert!(!walled.reachable(idx(1, 0, 0), idx(0, 0, -1)));
    }

    #[test]
    fn symmetric_in_endpoints() {
        // Spot-check symmetry over every cell pair of an irregular buffer.
        let mut n = Neighborhood::filled(CellState::Free);
        n.set_rel(0, 0, 0, CellState::Wall);
        n.set_rel(1, 1, 0, CellState::Wall);
        n.set_rel(-1, 0, 1, CellState::Wall);
        n.set_rel(0, -1, -1, CellState::Wall);
        for a in 0..27 {
            for b in 0..27 {
                assert_eq!(n.reachable(a, b), n.reachable(b, a), "asymmetry at ({a}, {b})");
            }
        }
    }

    #[test]
    fn path_around_a_corner() {
        // Only an L-shaped run of free cells; ends connect through the bend.
        let mut n = Neighborhood::filled(CellState::Wall);
        n.set_rel(-1, 0, 0, CellState::Free);
        n.set_rel(-1, 0, 1, CellState::Free);
        n.set_rel(0, 0, 1, CellState::Free);
        assert!(n.reachable(idx(-1, 0, 0), idx(0, 0, 1)));
        assert!(!n.reachable(idx(-1, 0, 0), idx(0, 0, 0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, ScriptedSource, SmallRngSource};

    #[test]
    fn deterministic_same_seed() {
        let mut a = SmallRngSource::new(12345);
        let mut b = SmallRngSource::new(12345);
        for _ in 0..100 {
            assert_eq!(a.random_int(0, 100), b.random_int(0, 100));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SmallRngSource::new(1);
        let mut b = SmallRngSource::new(2);
        let draws_a: Vec<i32> = (0..16).map(|_| a.random_int(0, 1000)).collect();
        let draws_b: Vec<i32> = (0..16).map(|_| b.random_int(0, 1000)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn range_is_inclusive() {
        let mut rng = SmallRngSource::new(7);
        for _ in 0..1000 {
            let v = rng.random_int(0, 3);
            assert!((0..=3).contains(&v));
        }
    }

    #[test]
    fn scripted_replays_and_wraps() {
        let mut src = ScriptedSource::new(vec![5, 90, 17]);
        assert_eq!(src.random_int(0, 100), 5);
        assert_eq!(src.random_int(0, 100), 90);
        assert_eq!(src.random_int(0, 100), 17);
        assert_eq!(src.random_int(0, 100), 5);
    }

    #[test]
    fn scripted_clamps_into_range() {
        let mut src = ScriptedSource::new(vec![-4, 250]);
        assert_eq!(src.random_int(0, 100), 0);
        assert_eq!(src.random_int(0, 100), 100);
    }

    #[test]
    fn empty_script_yields_min() {
        let mut src = ScriptedSource::new(vec![]);
        assert_eq!(src.random_int(3, 9), 3);
    }
}
