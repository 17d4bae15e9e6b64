use fish_school::{
    DVec2, Fish, FlockParams, Obstacle, SimConfig, SimError, SpawnParams, UpdateOrder, World,
};

fn config(width: f64, height: f64, fish_count: usize, seed: u64) -> SimConfig {
    SimConfig {
        width,
        height,
        fish_count,
        seed: Some(seed),
        ..SimConfig::default()
    }
}

fn still_fish(x: f64, y: f64) -> Fish {
    Fish::new(DVec2::new(x, y), DVec2::ZERO, FlockParams::default())
}

#[test]
fn lone_fish_at_rest_stays_put() {
    let mut world = World::new(SimConfig {
        obstacles_enabled: false,
        ..config(100.0, 100.0, 0, 1)
    })
    .unwrap();
    world.add_fish_with(still_fish(10.0, 10.0)).unwrap();

    world.step(1.0).unwrap();

    let fish = world.fishes()[0];
    assert_eq!(fish.pos, DVec2::new(10.0, 10.0));
    assert_eq!(fish.vel, DVec2::ZERO);
}

#[test]
fn close_pair_pushes_apart_along_x() {
    let mut world = World::new(config(100.0, 100.0, 0, 1)).unwrap();
    world.add_fish_with(still_fish(40.0, 50.0)).unwrap();
    world.add_fish_with(still_fish(50.0, 50.0)).unwrap();

    world.step(0.1).unwrap();

    let left = world.fishes()[0];
    let right = world.fishes()[1];
    // separation 30 outweighs cohesion 0.5 * 10
    assert_eq!(left.vel, DVec2::new(-25.0, 0.0));
    assert_eq!(right.vel, DVec2::new(25.0, 0.0));
    assert!(left.pos.x < 40.0 && left.pos.x > 0.0);
    assert!(right.pos.x > 50.0 && right.pos.x < 100.0);
    assert_eq!(left.pos.y, 50.0);
    assert_eq!(right.pos.y, 50.0);
}

#[test]
fn add_fish_appends_at_exact_point() {
    let mut world = World::new(config(100.0, 100.0, 7, 2)).unwrap();
    let before = world.fishes().to_vec();

    let index = world.add_fish(50.0, 50.0).unwrap();

    assert_eq!(index, 7);
    assert_eq!(world.len(), 8);
    assert_eq!(world.fishes()[index].pos, DVec2::new(50.0, 50.0));
    assert_eq!(&world.fishes()[..7], &before[..]);
    let speed = world.fishes()[index].speed();
    assert!((50.0..100.0).contains(&speed));
}

#[test]
fn disabled_obstacles_match_an_empty_world() {
    let mut with_rock = World::new(SimConfig {
        obstacles: vec![Obstacle::circle(DVec2::new(50.0, 50.0), 10.0).unwrap()],
        ..config(100.0, 100.0, 30, 9)
    })
    .unwrap();
    with_rock.set_obstacles_enabled(false);
    let mut without = World::new(config(100.0, 100.0, 30, 9)).unwrap();

    for _ in 0..200 {
        with_rock.step(1.0 / 60.0).unwrap();
        without.step(1.0 / 60.0).unwrap();
    }

    assert_eq!(with_rock.fishes(), without.fishes());
}

#[test]
fn enabled_obstacle_deflects_an_approaching_fish() {
    let rock = Obstacle::circle(DVec2::new(50.0, 50.0), 10.0).unwrap();
    let mut world = World::new(SimConfig {
        obstacles: vec![rock],
        ..config(100.0, 100.0, 0, 4)
    })
    .unwrap();
    world
        .add_fish_with(Fish::new(
            DVec2::new(75.0, 50.0),
            DVec2::new(-20.0, 0.0),
            FlockParams::default(),
        ))
        .unwrap();

    world.step(0.05).unwrap();

    // surface distance 15: push of 300 / 15 = 20 cancels the approach
    let fish = world.fishes()[0];
    assert!(fish.vel.x.abs() < 1e-9);
    assert!(!rock.contains(fish.pos));
}

#[test]
fn positions_stay_in_bounds_and_speed_is_capped() {
    let mut world = World::new(SimConfig {
        obstacles: vec![
            Obstacle::circle(DVec2::new(60.0, 40.0), 15.0).unwrap(),
            Obstacle::rectangle(DVec2::new(150.0, 110.0), 30.0, 20.0).unwrap(),
        ],
        ..config(200.0, 150.0, 120, 17)
    })
    .unwrap();
    let bounds = world.bounds();

    for frame in 0..300 {
        let dt = if frame % 50 == 0 { 0.5 } else { 1.0 / 60.0 };
        world.step(dt).unwrap();
        for fish in world.fishes() {
            assert!(bounds.contains(fish.pos), "out of bounds: {:?}", fish.pos);
            assert!(fish.speed() <= fish.params.max_speed + 1e-9);
        }
    }
}

#[test]
fn same_seed_same_trajectories() {
    let mut a = World::new(config(300.0, 200.0, 60, 1234)).unwrap();
    let mut b = World::new(config(300.0, 200.0, 60, 1234)).unwrap();
    assert_eq!(a.fishes(), b.fishes());

    for _ in 0..100 {
        a.step(1.0 / 30.0).unwrap();
        b.step(1.0 / 30.0).unwrap();
    }
    assert_eq!(a.fishes(), b.fishes());
}

#[test]
fn simultaneous_update_ignores_insertion_order() {
    let layout = [
        (40.0, 50.0, 5.0, 0.0),
        (52.0, 47.0, 0.0, 8.0),
        (61.0, 58.0, -3.0, 2.0),
        (45.0, 70.0, 1.0, -6.0),
    ];
    let mut forward = World::new(config(120.0, 120.0, 0, 5)).unwrap();
    let mut reversed = World::new(config(120.0, 120.0, 0, 5)).unwrap();
    for &(x, y, vx, vy) in &layout {
        forward
            .add_fish_with(Fish::new(DVec2::new(x, y), DVec2::new(vx, vy), FlockParams::default()))
            .unwrap();
    }
    for &(x, y, vx, vy) in layout.iter().rev() {
        reversed
            .add_fish_with(Fish::new(DVec2::new(x, y), DVec2::new(vx, vy), FlockParams::default()))
            .unwrap();
    }

    forward.step(0.1).unwrap();
    reversed.step(0.1).unwrap();

    let n = layout.len();
    for i in 0..n {
        let a = forward.fishes()[i];
        let b = reversed.fishes()[n - 1 - i];
        assert!(a.pos.abs_diff_eq(b.pos, 1e-9));
        assert!(a.vel.abs_diff_eq(b.vel, 1e-9));
    }
}

#[test]
fn sequential_update_can_be_selected() {
    let mut world = World::new(SimConfig {
        update_order: UpdateOrder::Sequential,
        ..config(100.0, 100.0, 40, 8)
    })
    .unwrap();
    for _ in 0..50 {
        world.step(1.0 / 60.0).unwrap();
    }
    assert_eq!(world.len(), 40);
    assert!(world.fishes().iter().all(|f| world.bounds().contains(f.pos)));
}

#[test]
fn invalid_configuration_is_rejected() {
    let negative_radius = SimConfig {
        fish: FlockParams {
            alignment_radius: -1.0,
            ..FlockParams::default()
        },
        ..SimConfig::default()
    };
    assert!(matches!(
        World::new(negative_radius),
        Err(SimError::InvalidConfig(_))
    ));

    let negative_speed = SimConfig {
        fish: FlockParams {
            max_speed: -150.0,
            ..FlockParams::default()
        },
        ..SimConfig::default()
    };
    assert!(World::new(negative_speed).is_err());

    let bad_spawn = SimConfig {
        spawn: SpawnParams {
            min_speed: -1.0,
            max_speed: 10.0,
        },
        ..SimConfig::default()
    };
    assert!(World::new(bad_spawn).is_err());

    let bad_bounds = SimConfig {
        height: f64::INFINITY,
        ..SimConfig::default()
    };
    assert!(World::new(bad_bounds).is_err());
}

#[test]
fn runtime_toggle_reaches_the_flag() {
    let mut world = World::new(config(100.0, 100.0, 3, 1)).unwrap();
    assert!(world.obstacles_enabled());
    world.add_obstacle(Obstacle::square(DVec2::new(20.0, 20.0), 5.0).unwrap());
    world.set_obstacles_enabled(false);
    assert!(!world.obstacles_enabled());
    assert_eq!(world.obstacles().len(), 1);
}
