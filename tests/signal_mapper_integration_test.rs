//! End-to-end tests: several producers multiplexed through one mapper

mod common;

use common::{drain, init_test_env, producer, record};
use event_mux::{MapperConfig, MapperError, ProducerId, Signal, SignalMapper};

#[test]
fn test_two_producers_with_muting() {
    init_test_env();
    let mapper: SignalMapper<&'static str, i32> = SignalMapper::new();
    let (events, _subscription) = record(mapper.mapped());

    let a: Signal<i32> = producer();
    let b: Signal<i32> = producer();
    mapper.map_connect1(&a, "a").unwrap();
    mapper.map_connect1(&b, "b").unwrap();

    a.emit(42);
    assert_eq!(drain(&events), vec![("a", 42)]);
    b.emit(7);
    assert_eq!(drain(&events), vec![("b", 7)]);

    mapper.remove_mapping(a.sender().unwrap());
    a.emit(99);
    assert!(drain(&events).is_empty());
    b.emit(1);
    assert_eq!(drain(&events), vec![("b", 1)]);
}

#[test]
fn test_mixed_zero_and_one_argument_producers() {
    init_test_env();
    let mapper: SignalMapper<String, Option<u32>> =
        SignalMapper::with_config(MapperConfig::new("toolbar")).unwrap();
    let (events, _subscription) = record(mapper.mapped());

    let reset: Signal<()> = producer();
    let zoom: Signal<Option<u32>> = producer();
    mapper.map_connect(&reset, "reset".to_string()).unwrap();
    mapper.map_connect1(&zoom, "zoom".to_string()).unwrap();

    zoom.emit(Some(150));
    reset.emit(());
    zoom.emit(None);

    assert_eq!(
        drain(&events),
        vec![
            ("zoom".to_string(), Some(150)),
            ("reset".to_string(), None),
            ("zoom".to_string(), None),
        ]
    );
}

#[test]
fn test_failed_connect_leaves_mapper_untouched() {
    init_test_env();
    let mapper: SignalMapper<u8, u8> = SignalMapper::new();
    let (events, _subscription) = record(mapper.mapped());
    let wired: Signal<u8> = producer();
    mapper.map_connect1(&wired, 1).unwrap();

    let orphan: Signal<u8> = Signal::new();
    let result = mapper.map_connect1(&orphan, 2);

    assert!(matches!(result, Err(MapperError::InvalidSender { .. })));
    assert_eq!(mapper.producers(), vec![wired.sender().unwrap()]);
    orphan.emit(5);
    wired.emit(6);
    assert_eq!(drain(&events), vec![(1, 6)]);
}

#[test]
fn test_mute_versus_disconnect() {
    init_test_env();
    let mapper: SignalMapper<char> = SignalMapper::new();
    let (events, _subscription) = record(mapper.mapped());
    let x: Signal<()> = producer();
    let y: Signal<()> = producer();
    mapper.map_connect(&x, 'x').unwrap();
    let y_connection = mapper.map_connect(&y, 'y').unwrap();

    // Muting: connection stays, nothing forwarded.
    mapper.remove_mapping(x.sender().unwrap());
    // Disconnecting: mapping stays, handler gone.
    y_connection.disconnect();
    x.emit(());
    y.emit(());
    assert!(drain(&events).is_empty());
    assert_eq!(x.receiver_count(), 1);
    assert!(mapper.contains(y.sender().unwrap()));

    mapper.set_mapping(x.sender().unwrap(), 'X');
    x.emit(());
    assert_eq!(drain(&events), vec![('X', ())]);
}

#[test]
fn test_scoped_subscription() {
    init_test_env();
    let mapper: SignalMapper<u16> = SignalMapper::new();
    let source: Signal<()> = producer();
    let guard = mapper.map_connect(&source, 3).unwrap().guard();
    let (events, _subscription) = record(mapper.mapped());

    source.emit(());
    drop(guard);
    source.emit(());

    assert_eq!(drain(&events), vec![(3, ())]);
    assert_eq!(source.receiver_count(), 0);
}

#[test]
fn test_explicit_identity_dispatch() {
    init_test_env();
    let mapper: SignalMapper<&'static str, f64> = SignalMapper::new();
    let (events, _subscription) = record(mapper.mapped());
    let sensor = ProducerId::from_raw(7_000_001);
    mapper.set_mapping(sensor, "thermometer");

    mapper.map1_for(sensor, 21.5);
    mapper.map_for(sensor);
    mapper.map_for(ProducerId::from_raw(7_000_002));

    assert_eq!(drain(&events), vec![("thermometer", 21.5), ("thermometer", 0.0)]);
}
