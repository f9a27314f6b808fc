// src/board/tables.rs - Pin tables for the supported starter kits
//
// Columns: offset, gpiochip, controller, BOARD, BCM, SOC name, then the PWM
// controller and channel where the pin has one.

use super::{BoardModel, BoardSpec, PinDefinition};

const fn pin(
    offset: u32,
    chip: u32,
    controller: &'static str,
    board: u32,
    bcm: u32,
    soc: &'static str,
) -> PinDefinition {
    PinDefinition::new(offset, chip, controller, board, bcm, soc)
}

pub static J721E_SK_PINS: [PinDefinition; 26] = [
    pin(84, 1, "600000.gpio", 3, 2, "GPIO0_84"),
    pin(83, 1, "600000.gpio", 5, 3, "GPIO0_83"),
    pin(7, 1, "600000.gpio", 7, 4, "GPIO0_7"),
    pin(70, 1, "600000.gpio", 8, 14, "GPIO0_70"),
    pin(81, 1, "600000.gpio", 10, 15, "GPIO0_81"),
    pin(71, 1, "600000.gpio", 11, 17, "GPIO0_71"),
    pin(1, 1, "600000.gpio", 12, 18, "GPIO0_1"),
    pin(82, 1, "600000.gpio", 13, 27, "GPIO0_82"),
    pin(11, 1, "600000.gpio", 15, 22, "GPIO0_11"),
    pin(5, 1, "600000.gpio", 16, 23, "GPIO0_5"),
    pin(12, 2, "601000.gpio", 18, 24, "GPIO0_12"),
    pin(101, 1, "600000.gpio", 19, 10, "GPIO0_101"),
    pin(107, 1, "600000.gpio", 21, 9, "GPIO0_107"),
    pin(8, 1, "600000.gpio", 22, 25, "GPIO0_8"),
    pin(103, 1, "600000.gpio", 23, 11, "GPIO0_103"),
    pin(102, 1, "600000.gpio", 24, 8, "GPIO0_102"),
    pin(108, 1, "600000.gpio", 26, 7, "GPIO0_108"),
    pin(93, 1, "600000.gpio", 29, 5, "GPIO0_93").with_pwm("3020000.pwm", 0),
    pin(94, 1, "600000.gpio", 31, 6, "GPIO0_94").with_pwm("3020000.pwm", 1),
    pin(98, 1, "600000.gpio", 32, 12, "GPIO0_98").with_pwm("3030000.pwm", 0),
    pin(99, 1, "600000.gpio", 33, 13, "GPIO0_99").with_pwm("3030000.pwm", 1),
    pin(2, 1, "600000.gpio", 35, 19, "GPIO0_2"),
    pin(97, 1, "600000.gpio", 36, 16, "GPIO0_97"),
    pin(115, 1, "600000.gpio", 37, 26, "GPIO0_115"),
    pin(3, 1, "600000.gpio", 38, 20, "GPIO0_3"),
    pin(4, 1, "600000.gpio", 40, 21, "GPIO0_4"),
];

pub static AM68_SK_PINS: [PinDefinition; 26] = [
    pin(4, 4, "600000.gpio", 3, 2, "GPIO0_4"),
    pin(5, 4, "600000.gpio", 5, 3, "GPIO0_5"),
    pin(66, 3, "42110000.gpio", 7, 4, "WKUP_GPIO0_66"),
    pin(1, 4, "600000.gpio", 8, 14, "GPIO0_1"),
    pin(2, 4, "600000.gpio", 10, 15, "GPIO0_2"),
    pin(42, 4, "600000.gpio", 11, 17, "GPIO0_42"),
    pin(46, 4, "600000.gpio", 12, 18, "GPIO0_46"),
    pin(36, 4, "600000.gpio", 13, 27, "GPIO0_36"),
    pin(49, 3, "42110000.gpio", 15, 22, "WKUP_GPIO0_49"),
    pin(3, 4, "600000.gpio", 16, 23, "GPIO0_3"),
    pin(13, 4, "600000.gpio", 18, 24, "GPIO0_13"),
    pin(1, 3, "42110000.gpio", 19, 10, "WKUP_GPIO0_1"),
    pin(2, 3, "42110000.gpio", 21, 9, "WKUP_GPIO0_2"),
    pin(67, 3, "42110000.gpio", 22, 25, "WKUP_GPIO0_67"),
    pin(0, 3, "42110000.gpio", 23, 11, "WKUP_GPIO0_0"),
    pin(3, 3, "42110000.gpio", 24, 8, "WKUP_GPIO0_3"),
    pin(15, 3, "42110000.gpio", 26, 7, "WKUP_GPIO0_15"),
    pin(56, 3, "42110000.gpio", 29, 5, "WKUP_GPIO0_56"),
    pin(57, 3, "42110000.gpio", 31, 6, "WKUP_GPIO0_57"),
    pin(35, 4, "600000.gpio", 32, 12, "GPIO0_35").with_pwm("3030000.pwm", 0),
    pin(51, 4, "600000.gpio", 33, 13, "GPIO0_51").with_pwm("3000000.pwm", 0),
    pin(47, 4, "600000.gpio", 35, 19, "GPIO0_47"),
    pin(41, 4, "600000.gpio", 36, 16, "GPIO0_41").with_pwm("3040000.pwm", 0),
    pin(27, 4, "600000.gpio", 37, 26, "GPIO0_27"),
    pin(48, 4, "600000.gpio", 38, 20, "GPIO0_48"),
    pin(45, 4, "600000.gpio", 40, 21, "GPIO0_45"),
];

pub static AM69_SK_PINS: [PinDefinition; 26] = [
    pin(87, 2, "42110000.gpio", 3, 2, "WKUP_GPIO0_87"),
    pin(65, 3, "600000.gpio", 5, 3, "WKUP_GPIO0_65"),
    pin(66, 2, "42110000.gpio", 7, 4, "WKUP_GPIO0_66"),
    pin(1, 3, "600000.gpio", 8, 14, "GPIO0_1"),
    pin(2, 3, "600000.gpio", 10, 15, "GPIO0_2"),
    pin(42, 3, "600000.gpio", 11, 17, "GPIO0_42"),
    pin(46, 3, "600000.gpio", 12, 18, "GPIO0_46"),
    pin(36, 3, "600000.gpio", 13, 27, "GPIO0_36"),
    pin(49, 2, "42110000.gpio", 15, 22, "WKUP_GPIO0_49"),
    pin(3, 3, "600000.gpio", 16, 23, "GPIO0_3"),
    pin(13, 3, "600000.gpio", 18, 24, "GPIO0_13"),
    pin(1, 2, "42110000.gpio", 19, 10, "WKUP_GPIO0_1"),
    pin(2, 2, "42110000.gpio", 21, 9, "WKUP_GPIO0_2"),
    pin(67, 2, "42110000.gpio", 22, 25, "WKUP_GPIO0_67"),
    pin(0, 2, "42110000.gpio", 23, 11, "WKUP_GPIO0_0"),
    pin(3, 2, "42110000.gpio", 24, 8, "WKUP_GPIO0_3"),
    pin(15, 2, "42110000.gpio", 26, 7, "WKUP_GPIO0_15"),
    pin(56, 2, "42110000.gpio", 29, 5, "WKUP_GPIO0_56"),
    pin(57, 2, "42110000.gpio", 31, 6, "WKUP_GPIO0_57"),
    pin(35, 3, "600000.gpio", 32, 12, "GPIO0_35").with_pwm("3030000.pwm", 0),
    pin(51, 3, "600000.gpio", 33, 13, "GPIO0_51").with_pwm("3000000.pwm", 0),
    pin(47, 3, "600000.gpio", 35, 19, "GPIO0_47"),
    pin(41, 3, "600000.gpio", 36, 16, "GPIO0_41").with_pwm("3040000.pwm", 0),
    pin(27, 3, "600000.gpio", 37, 26, "GPIO0_27"),
    pin(48, 3, "600000.gpio", 38, 20, "GPIO0_48"),
    pin(45, 3, "600000.gpio", 40, 21, "GPIO0_45"),
];

pub static AM62A_SK_PINS: [PinDefinition; 26] = [
    pin(44, 2, "600000.gpio", 3, 2, "I2C2_SDA"),
    pin(43, 2, "600000.gpio", 5, 3, "I2C2_SCL"),
    pin(30, 3, "601000.gpio", 7, 4, "GPIO1_30"),
    pin(25, 3, "601000.gpio", 8, 14, "GPIO1_25"),
    pin(24, 3, "601000.gpio", 10, 15, "GPIO1_24"),
    pin(11, 3, "601000.gpio", 11, 17, "GPIO1_11"),
    pin(14, 3, "601000.gpio", 12, 18, "GPIO1_14").with_pwm("23000000.pwm", 1),
    pin(42, 2, "600000.gpio", 13, 27, "GPIO0_42"),
    pin(22, 3, "601000.gpio", 15, 22, "GPIO1_22"),
    pin(38, 2, "600000.gpio", 16, 23, "GPIO0_38"),
    pin(39, 2, "600000.gpio", 18, 24, "GPIO0_39"),
    pin(18, 3, "601000.gpio", 19, 10, "GPIO1_18"),
    pin(19, 3, "601000.gpio", 21, 9, "GPIO1_19"),
    pin(14, 2, "600000.gpio", 22, 25, "GPIO0_14"),
    pin(17, 3, "601000.gpio", 23, 11, "GPIO1_17"),
    pin(15, 3, "601000.gpio", 24, 8, "GPIO1_15"),
    pin(16, 3, "601000.gpio", 26, 7, "GPIO1_16"),
    pin(36, 2, "600000.gpio", 29, 5, "GPIO0_36"),
    pin(33, 2, "600000.gpio", 31, 6, "GPIO0_33"),
    pin(40, 2, "600000.gpio", 32, 12, "GPIO0_40"),
    pin(10, 3, "601000.gpio", 33, 13, "GPIO1_10").with_pwm("23010000.pwm", 1),
    pin(13, 3, "601000.gpio", 35, 19, "GPIO1_13").with_pwm("23000000.pwm", 0),
    pin(9, 3, "601000.gpio", 36, 16, "GPIO1_09").with_pwm("23010000.pwm", 0),
    pin(41, 2, "600000.gpio", 37, 26, "GPIO0_41"),
    pin(8, 3, "601000.gpio", 38, 20, "GPIO1_08"),
    pin(7, 3, "601000.gpio", 40, 21, "GPIO1_07"),
];

pub static AM62P_SK_PINS: [PinDefinition; 26] = [
    pin(44, 1, "600000.gpio", 3, 2, "I2C2_SDA"),
    pin(43, 1, "600000.gpio", 5, 3, "I2C2_SCL"),
    pin(30, 2, "601000.gpio", 7, 4, "GPIO1_30"),
    pin(25, 2, "601000.gpio", 8, 14, "GPIO1_25"),
    pin(24, 2, "601000.gpio", 10, 15, "GPIO1_24"),
    pin(11, 2, "601000.gpio", 11, 17, "GPIO1_11"),
    pin(14, 2, "601000.gpio", 12, 18, "GPIO1_14"),
    pin(42, 1, "600000.gpio", 13, 27, "GPIO0_42"),
    pin(22, 2, "601000.gpio", 15, 22, "GPIO1_22"),
    pin(38, 1, "600000.gpio", 16, 23, "GPIO0_38"),
    pin(39, 1, "600000.gpio", 18, 24, "GPIO0_39"),
    pin(18, 2, "601000.gpio", 19, 10, "GPIO1_18"),
    pin(19, 2, "601000.gpio", 21, 9, "GPIO1_19"),
    pin(14, 1, "600000.gpio", 22, 25, "GPIO0_14"),
    pin(17, 2, "601000.gpio", 23, 11, "GPIO1_17"),
    pin(15, 2, "601000.gpio", 24, 8, "GPIO1_15").with_pwm("23000000.pwm", 0),
    pin(16, 2, "601000.gpio", 26, 7, "GPIO1_16").with_pwm("23000000.pwm", 1),
    pin(36, 1, "600000.gpio", 29, 5, "GPIO0_36"),
    pin(33, 1, "600000.gpio", 31, 6, "GPIO0_33"),
    pin(40, 1, "600000.gpio", 32, 12, "GPIO0_40"),
    pin(10, 2, "601000.gpio", 33, 13, "GPIO1_10").with_pwm("23010000.pwm", 1),
    pin(13, 2, "601000.gpio", 35, 19, "GPIO1_13"),
    pin(9, 2, "601000.gpio", 36, 16, "GPIO1_09").with_pwm("23010000.pwm", 0),
    pin(41, 1, "600000.gpio", 37, 26, "GPIO0_41"),
    pin(8, 2, "601000.gpio", 38, 20, "GPIO1_08"),
    pin(7, 2, "601000.gpio", 40, 21, "GPIO1_07"),
];

/// Registry of supported boards, in detection priority order.
pub static BOARDS: [BoardSpec; 5] = [
    BoardSpec {
        model: BoardModel::J721eSk,
        compatibles: &["ti,j721e-sk", "ti,j721e"],
        pins: &J721E_SK_PINS,
        info: &[
            ("RAM", "4096M"),
            ("REVISION", "E2"),
            ("TYPE", "J721E-EAIK"),
            ("MANUFACTURER", "TI"),
            ("PROCESSOR", "ARM A72"),
        ],
        carrier_boards: &[],
    },
    BoardSpec {
        model: BoardModel::Am68Sk,
        compatibles: &["ti,am68-sk", "ti,j721s2"],
        pins: &AM68_SK_PINS,
        info: &[
            ("RAM", "4096M"),
            ("REVISION", "E2"),
            ("TYPE", "AM68-SK"),
            ("MANUFACTURER", "TI"),
            ("PROCESSOR", "ARM A72"),
        ],
        carrier_boards: &[],
    },
    BoardSpec {
        model: BoardModel::Am69Sk,
        compatibles: &["ti,am69-sk", "ti,j784s4"],
        pins: &AM69_SK_PINS,
        info: &[
            ("RAM", "4096M"),
            ("REVISION", "E2"),
            ("TYPE", "AM69-SK"),
            ("MANUFACTURER", "TI"),
            ("PROCESSOR", "ARM A72"),
        ],
        carrier_boards: &[],
    },
    BoardSpec {
        model: BoardModel::Am62aSk,
        compatibles: &["ti,am62a7-sk", "ti,am62a7"],
        pins: &AM62A_SK_PINS,
        info: &[
            ("RAM", "4096M"),
            ("REVISION", "E2"),
            ("TYPE", "AM62A-SK"),
            ("MANUFACTURER", "TI"),
            ("PROCESSOR", "ARM A53"),
        ],
        carrier_boards: &[],
    },
    BoardSpec {
        model: BoardModel::Am62pSk,
        compatibles: &["ti,am62p5-sk", "ti,am62p5"],
        pins: &AM62P_SK_PINS,
        info: &[
            ("RAM", "8192M"),
            ("REVISION", "E1"),
            ("TYPE", "AM62P-SK"),
            ("MANUFACTURER", "TI"),
            ("PROCESSOR", "ARM A53"),
        ],
        carrier_boards: &[],
    },
];
