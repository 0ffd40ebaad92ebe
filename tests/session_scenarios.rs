use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pragia_taxi::constants::PASSENGER_RADIUS;
use pragia_taxi::core::Passenger;
use pragia_taxi::geometry::spawn::jittered;
use pragia_taxi::geometry::Position;
use pragia_taxi::{GameConfig, GameLoop, GameOverReason, InputState, Phase, Session};

fn seeded_session(seed: u64) -> Session {
    Session::new(GameConfig::default().with_seed(seed)).unwrap()
}

fn waiting(position: Position, origin: usize, destination: usize) -> Passenger {
    Passenger {
        position,
        radius: PASSENGER_RADIUS,
        picked: false,
        done: false,
        origin,
        destination,
    }
}

fn action() -> InputState {
    InputState {
        action: true,
        ..InputState::default()
    }
}

#[test]
fn pickup_at_stop_boards_exactly_one_passenger() {
    let mut session = seeded_session(1);
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let stops = session.world().stops.clone();

    let near = jittered(&mut rng, stops[0].position, 12.0);
    let also_near = jittered(&mut rng, stops[0].position, 12.0);
    session.world_mut().passengers = vec![
        waiting(near, 0, 1),
        waiting(also_near, 0, 2),
        waiting(stops[3].position, 3, 4),
    ];
    session.vehicle_mut().position = Position::new(110.0, 110.0);

    let events = session.tick(&action());

    assert_eq!(events.picked_up, Some(0));
    let picked: Vec<_> = session.world().passengers.iter().filter(|p| p.picked).collect();
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].destination, 1);
    assert!(session.is_carrying());
    assert!(session.snapshot().picked);
}

#[test]
fn pickup_needs_the_action_key() {
    let mut session = seeded_session(1);
    session.world_mut().passengers = vec![
        waiting(Position::new(112.0, 108.0), 0, 1),
        waiting(Position::new(790.0, 300.0), 2, 0),
    ];
    session.vehicle_mut().position = Position::new(110.0, 110.0);

    let events = session.tick(&InputState::default());

    assert_eq!(events.picked_up, None);
    assert!(!session.is_carrying());
}

#[test]
fn delivery_scores_and_refuels() {
    let mut session = seeded_session(2);
    let mut carried = waiting(Position::new(110.0, 110.0), 0, 1);
    carried.picked = true;
    session.world_mut().passengers = vec![
        carried,
        waiting(Position::new(790.0, 300.0), 2, 3),
        waiting(Position::new(430.0, 470.0), 3, 0),
    ];
    session.set_fuel(50.0);
    session.vehicle_mut().position = Position::new(430.0, 150.0);

    let events = session.tick(&action());

    let delivery = events.delivered.expect("passenger should be delivered");
    assert_eq!(delivery.destination, 1);
    assert_eq!(session.score(), 10);
    assert!((session.fuel() - 58.0).abs() < 1e-4);
    assert!(!session.is_carrying());
    // the finished passenger is reconciled away in the same tick
    assert_eq!(session.world().passengers.len(), 2);
    assert!(session.world().passengers.iter().all(|p| !p.done));
}

#[test]
fn delivery_refuel_is_capped() {
    let mut session = seeded_session(2);
    let mut carried = waiting(Position::new(110.0, 110.0), 0, 1);
    carried.picked = true;
    session.world_mut().passengers = vec![carried];
    session.set_fuel(96.0);
    session.vehicle_mut().position = Position::new(440.0, 140.0);

    session.tick(&action());

    assert_eq!(session.fuel(), 100.0);
    assert_eq!(session.score(), 10);
    // one passenger left after the drop: the set is topped back up
    assert!(session.world().passengers.len() >= 2);
}

#[test]
fn running_out_of_fuel_off_road_ends_the_game() {
    let mut session = seeded_session(3);
    session.vehicle_mut().position = Position::new(20.0, 20.0);

    let mut ticks = 0;
    while session.phase() == Phase::Running {
        session.tick(&InputState::default());
        ticks += 1;
        assert!(ticks <= 101, "fuel never ran out");
    }

    assert_eq!(session.fuel(), 0.0);
    assert_eq!(session.end_reason(), Some(GameOverReason::OutOfFuel));

    let score = session.score();
    let passengers = session.world().passengers.clone();
    let vehicle = session.vehicle().clone();
    let driving = InputState {
        accelerate: true,
        turn_left: true,
        action: true,
        ..InputState::default()
    };
    for _ in 0..30 {
        let events = session.tick(&driving);
        assert_eq!(events.game_over, None);
    }
    assert_eq!(session.score(), score);
    assert_eq!(session.fuel(), 0.0);
    assert_eq!(session.world().passengers, passengers);
    assert_eq!(session.vehicle(), &vehicle);
}

#[test]
fn restart_after_game_over_resets_everything() {
    let mut game = GameLoop::new(GameConfig::default().with_seed(4)).unwrap();
    game.session_mut().vehicle_mut().position = Position::new(20.0, 20.0);
    for _ in 0..200 {
        game.frame(&InputState::default(), Duration::from_millis(16));
    }
    assert!(game.session().is_game_over());
    assert!(!game.is_countdown_active());

    let restart = InputState {
        restart: true,
        ..InputState::default()
    };
    game.frame(&restart, Duration::from_millis(16));

    let session = game.session();
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.level(), 1);
    assert_eq!(session.score(), 0);
    assert_eq!(session.time_left(), 120);
    assert!(!session.is_carrying());
    assert!(game.is_countdown_active());
    // one idle tick ran after the restart, the taxi is still parked at spawn
    assert_eq!(session.vehicle().position, Position::new(120.0, 120.0));
    assert_eq!(session.vehicle().angle, 0.0);
    assert_eq!(session.vehicle().speed, 0.0);
    assert_eq!(session.fuel(), 100.0);
}

#[test]
fn invariants_hold_over_long_random_drives() {
    for seed in 0..8u64 {
        let mut session = seeded_session(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 100);
        let mut last_score = 0;
        let mut last_time = session.time_left();

        for tick in 0..3000u32 {
            use rand::Rng;
            let input = InputState {
                accelerate: rng.gen_bool(0.6),
                brake: rng.gen_bool(0.1),
                turn_left: rng.gen_bool(0.2),
                turn_right: rng.gen_bool(0.2),
                action: rng.gen_bool(0.5),
                restart: false,
            };
            session.tick(&input);
            if tick % 60 == 0 {
                session.on_second_elapsed();
            }

            assert!((0.0..=100.0).contains(&session.fuel()));
            assert!(session.score() >= last_score);
            assert!(session.time_left() <= last_time && session.time_left() <= 120);
            last_score = session.score();
            last_time = session.time_left();

            let world = session.world();
            assert!(world.passengers.iter().filter(|p| p.picked).count() <= 1);
            assert!(world.passengers.len() >= 2);
            assert!(world.passengers.iter().all(|p| p.origin != p.destination));

            let camera = session.camera();
            assert!(camera.x >= 0.0 && camera.y >= 0.0);
        }
    }
}
