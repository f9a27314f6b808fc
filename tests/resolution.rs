// Integration tests for the full resolution pipeline against fixture trees

mod common;

use common::{CapturedLogs, Fixture, BUS_100000, BUS_F0000, PLATFORM};
use ti_gpio::board::{BoardModel, BoardSpec, PerChipCount, PinDefinition};
use ti_gpio::{Channel, GpioLine, ResolveError, Resolver};

#[test]
fn test_am68_header_pin_8() {
    let fixture = Fixture::new(&["ti,am68-sk", "ti,j721s2"]);
    let resolution = Resolver::new(fixture.config()).resolve().unwrap();

    assert_eq!(resolution.model, BoardModel::Am68Sk);
    assert_eq!(resolution.info.get("TYPE"), Some("AM68-SK"));

    let by_board = resolution.channels.get(&Channel::Board(8)).unwrap();
    let by_bcm = resolution.channels.get(&Channel::Bcm(14)).unwrap();
    let by_soc = resolution.channels.get(&Channel::Soc("GPIO0_1".into())).unwrap();
    for info in [by_board, by_bcm, by_soc] {
        assert_eq!(info.gpio_chip, 4);
        assert_eq!(info.line, GpioLine::ChipRelative { offset: 1 });
        assert_eq!(info.pwm_id, None);
    }
    assert_eq!(by_board.channel, Channel::Board(8));
    assert_eq!(by_bcm.channel, Channel::Bcm(14));
    assert_eq!(by_soc.channel, Channel::Soc("GPIO0_1".into()));
}

#[test]
fn test_missing_pwm_controller_degrades_to_gpio() {
    let fixture = Fixture::new(&["ti,j721e-sk", "ti,j721e"]);
    let pwmchip = fixture.add_pwm_controller(BUS_100000, "3030000.pwm", "pwmchip2");

    let resolution = Resolver::new(fixture.config()).resolve().unwrap();
    assert_eq!(resolution.model, BoardModel::J721eSk);
    assert_eq!(resolution.channels.len(), 26);

    // 3020000.pwm is absent: pins 29 and 31 keep their channel ids but lose PWM.
    for (board, id) in [(29, 0), (31, 1)] {
        let info = resolution.channels.get(&Channel::Board(board)).unwrap();
        assert_eq!(info.pwm_chip_dir, None);
        assert_eq!(info.pwm_id, Some(id));
        assert!(info.pwm().is_none());
    }
    for (board, id) in [(32, 0), (33, 1)] {
        let info = resolution.channels.get(&Channel::Board(board)).unwrap();
        assert_eq!(info.pwm(), Some((pwmchip.as_path(), id)));
    }
    assert_eq!(resolution.channels.pwm_capable(), 2);
}

#[test]
fn test_pwm_controller_without_pwmchip() {
    let fixture = Fixture::new(&["ti,am62p5"]);
    std::fs::create_dir_all(fixture.root().join(BUS_F0000).join("23000000.pwm/pwm")).unwrap();
    fixture.add_pwm_controller(BUS_F0000, "23010000.pwm", "pwmchip0");

    let resolution = Resolver::new(fixture.config()).resolve().unwrap();
    assert_eq!(resolution.model, BoardModel::Am62pSk);
    assert!(resolution.channels.get(&Channel::Board(24)).unwrap().pwm().is_none());
    assert!(resolution.channels.get(&Channel::Board(33)).unwrap().pwm().is_some());
    assert!(resolution.channels.get(&Channel::Soc("GPIO1_09".into())).unwrap().pwm().is_some());
}

#[test]
fn test_unrecognized_platform() {
    let fixture = Fixture::new(&["raspberrypi,4-model-b", "brcm,bcm2711"]);
    let err = Resolver::new(fixture.config()).resolve().unwrap_err();
    match err {
        ResolveError::PlatformUnidentified { compatibles } => {
            assert_eq!(compatibles, vec!["raspberrypi,4-model-b", "brcm,bcm2711"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_compatible_file() {
    let fixture = Fixture::new(&[]);
    std::fs::remove_file(fixture.root().join("proc/device-tree/compatible")).unwrap();
    let err = Resolver::new(fixture.config()).resolve().unwrap_err();
    assert!(matches!(err, ResolveError::CompatibleUnreadable { .. }));
}

#[test]
fn test_chip_relative_records_located_controllers() {
    let fixture = Fixture::new(&["ti,j721e"]);
    let controller = fixture.add_gpio_controller(BUS_100000, "600000.gpio", 300, 128);

    let resolution = Resolver::new(fixture.config()).resolve().unwrap();
    let pin3 = resolution.channels.get(&Channel::Board(3)).unwrap();
    assert_eq!(pin3.gpio_controller_dir.as_deref(), Some(controller.as_path()));
    assert_eq!(pin3.line, GpioLine::ChipRelative { offset: 84 });
    // 601000.gpio is absent, which chip-relative numbering tolerates.
    let pin18 = resolution.channels.get(&Channel::Board(18)).unwrap();
    assert_eq!(pin18.gpio_chip, 2);
    assert_eq!(pin18.gpio_controller_dir, None);
}

#[test]
fn test_global_numbering() {
    let fixture = Fixture::new(&["ti,j721e-sk"]);
    fixture.add_gpio_controller(BUS_100000, "600000.gpio", 300, 128);
    fixture.add_gpio_controller(PLATFORM, "601000.gpio", 428, 36);

    let resolution = Resolver::new(fixture.global_config()).resolve().unwrap();
    let channels = &resolution.channels;
    assert_eq!(
        channels.get(&Channel::Board(3)).unwrap().line,
        GpioLine::Global {
            number: 384,
            name: "gpio384".into()
        }
    );
    assert_eq!(
        channels.get(&Channel::Bcm(24)).unwrap().line,
        GpioLine::Global {
            number: 440,
            name: "gpio440".into()
        }
    );
    for info in channels.board.values() {
        assert!(info.gpio_controller_dir.is_some());
    }
}

#[test]
fn test_global_numbering_requires_every_controller() {
    let fixture = Fixture::new(&["ti,j721e"]);
    fixture.add_gpio_controller(BUS_100000, "600000.gpio", 300, 128);

    let err = Resolver::new(fixture.global_config()).resolve().unwrap_err();
    match err {
        ResolveError::RequiredControllerMissing { controller } => assert_eq!(controller, "601000.gpio"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_global_numbering_unreadable_metadata() {
    let fixture = Fixture::new(&["ti,am62a7"]);
    fixture.add_gpio_controller(BUS_F0000, "600000.gpio", 399, 92);
    fixture.add_gpio_controller(BUS_F0000, "601000.gpio", 347, 52);
    fixture.write(
        &format!("{}/601000.gpio/gpio/gpiochip347/ngpio", BUS_F0000),
        b"fifty-two\n",
    );

    let err = Resolver::new(fixture.global_config()).resolve().unwrap_err();
    match err {
        ResolveError::ControllerMetadataUnreadable { controller, .. } => assert_eq!(controller, "601000.gpio"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_plugin_manager_warns_once() {
    let fixture = Fixture::new(&["ti,am69-sk"]);
    fixture.add_gpio_controller(PLATFORM, "42110000.gpio", 0, 89);
    fixture.add_gpio_controller(BUS_100000, "600000.gpio", 89, 66);

    let resolver = Resolver::new(fixture.global_config());
    assert!(!resolver.carrier().has_warned());
    let logs = CapturedLogs::default();
    logs.capture(|| {
        for _ in 0..3 {
            resolver.resolve().unwrap();
        }
    });
    assert!(resolver.carrier().has_warned());
    assert_eq!(logs.count("Plugin manager information missing"), 1);
    // Already emitted by the first pass.
    assert!(!resolver.carrier().warn_missing_ids());
}

#[test]
fn test_plugin_manager_present_no_warning() {
    let fixture = Fixture::new(&["ti,am69-sk"]);
    fixture.add_gpio_controller(PLATFORM, "42110000.gpio", 0, 89);
    fixture.add_gpio_controller(BUS_100000, "600000.gpio", 89, 66);
    fixture.add_plugin_manager_ids(&["3509-0000-a00"]);

    let resolver = Resolver::new(fixture.global_config());
    resolver.resolve().unwrap();
    assert!(!resolver.carrier().has_warned());
}

#[test]
fn test_chip_relative_skips_carrier_check() {
    let fixture = Fixture::new(&["ti,am69-sk"]);
    let resolver = Resolver::new(fixture.config());
    resolver.resolve().unwrap();
    assert!(!resolver.carrier().has_warned());
}

static VARIANT_OFFSETS: [(u32, u32); 2] = [(224, 134), (169, 106)];
static VARIANT_NAMES: [(u32, &str); 1] = [(169, "PQ.06")];
static VARIANT_PINS: [PinDefinition; 2] = [
    PinDefinition::new(0, 0, "2200000.gpio", 7, 4, "AUD_MCLK")
        .with_variant_offset(&VARIANT_OFFSETS)
        .with_export_name(PerChipCount::Variant(&VARIANT_NAMES)),
    PinDefinition::new(12, 1, "c2f0000.gpio", 11, 17, "UART2_RTS"),
];
static VARIANT_BOARD: BoardSpec = BoardSpec {
    model: BoardModel::J721eSk,
    compatibles: &["test,variant-board"],
    pins: &VARIANT_PINS,
    info: &[],
    carrier_boards: &["3509"],
};

#[test]
fn test_variant_offsets_in_both_numberings() {
    let fixture = Fixture::new(&[]);
    fixture.add_gpio_controller(PLATFORM, "2200000.gpio", 216, 169);
    fixture.add_gpio_controller(PLATFORM, "c2f0000.gpio", 384, 32);
    fixture.add_plugin_manager_ids(&["3509-0000-a00", "3448-0000-b00"]);

    let relative = Resolver::new(fixture.config()).resolve_board(&VARIANT_BOARD).unwrap();
    assert_eq!(
        relative.get(&Channel::Board(7)).unwrap().line,
        GpioLine::ChipRelative { offset: 106 }
    );

    let global = Resolver::new(fixture.global_config()).resolve_board(&VARIANT_BOARD).unwrap();
    assert_eq!(
        global.get(&Channel::Soc("AUD_MCLK".into())).unwrap().line,
        GpioLine::Global {
            number: 322,
            name: "PQ.06".into()
        }
    );
    assert_eq!(
        global.get(&Channel::Bcm(17)).unwrap().line,
        GpioLine::Global {
            number: 396,
            name: "gpio396".into()
        }
    );
}

#[test]
fn test_variant_offset_needs_controller() {
    let fixture = Fixture::new(&[]);
    let err = Resolver::new(fixture.config())
        .resolve_board(&VARIANT_BOARD)
        .unwrap_err();
    match err {
        ResolveError::RequiredControllerMissing { controller } => assert_eq!(controller, "2200000.gpio"),
        other => panic!("unexpected error: {other}"),
    }
}

static SHARED_BCM_PINS: [PinDefinition; 2] = [
    PinDefinition::new(84, 1, "600000.gpio", 3, 2, "GPIO0_84"),
    PinDefinition::new(83, 1, "600000.gpio", 5, 2, "GPIO0_83"),
];
static SHARED_BCM_BOARD: BoardSpec = BoardSpec {
    model: BoardModel::J721eSk,
    compatibles: &["test,shared-bcm"],
    pins: &SHARED_BCM_PINS,
    info: &[],
    carrier_boards: &[],
};

#[test]
fn test_shared_bcm_number_rejected() {
    let fixture = Fixture::new(&[]);
    let err = Resolver::new(fixture.config())
        .resolve_board(&SHARED_BCM_BOARD)
        .unwrap_err();
    match err {
        ResolveError::DuplicateChannel { board, bcm, soc } => {
            assert_eq!(board, 5);
            assert_eq!(bcm, 2);
            assert_eq!(soc, "GPIO0_83");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_global_numbering_base_overflow() {
    let fixture = Fixture::new(&["ti,j721e-sk"]);
    fixture.add_gpio_controller(BUS_100000, "600000.gpio", u32::MAX - 5, 128);
    fixture.add_gpio_controller(BUS_100000, "601000.gpio", 428, 36);

    let err = Resolver::new(fixture.global_config()).resolve().unwrap_err();
    match err {
        ResolveError::ControllerMetadataUnreadable { controller, .. } => assert_eq!(controller, "600000.gpio"),
        other => panic!("unexpected error: {other}"),
    }
}
