//! The fixed band catalog.
//!
//! Seventeen bands: fifteen detail panels (2200 m through 70 cm) and two
//! synthetic overview pseudo-bands for the summary page. Pure data; the
//! layout engine in [`crate::layout`] is the only consumer.
//!
//! Conventions carried throughout:
//! - Detail bands span VSWR (-1, 10) vertically so the segment bars can
//!   live below the VSWR = 1 floor; 2 m and 70 cm magnify (0.7, 2.1).
//! - Band-name labels keep a leading space to sit clear of the axis edge.
//! - Repeater numbering is plain text (R1, R2, ...) per RAC usage.

use crate::model::{Band, Category, Category::*, Label, Segment, Slot};

const fn seg(category: Category, start: f64, end: f64, slot: Slot) -> Segment {
    Segment {
        category,
        start,
        end,
        slot,
    }
}

const fn lbl(x: f64, y: f64, size: f64, text: &'static str) -> Label {
    Label { x, y, size, text }
}

// Detail-band stripe slots, in VSWR data units.
const FULL: Slot = Slot { offset: -1.0, height: 2.0 };
const LOWER: Slot = Slot { offset: -1.0, height: 1.0 };
const UPPER: Slot = Slot { offset: 0.0, height: 1.0 };

// Thirds, for bands that stack three modes per channel.
const THIRD_TOP: Slot = Slot { offset: 0.33, height: 0.67 };
const THIRD_MID: Slot = Slot { offset: -0.33, height: 0.67 };
const THIRD_LOW: Slot = Slot { offset: -1.0, height: 0.67 };

// Magnified-panel stripe (2 m / 70 cm).
const VHF: Slot = Slot { offset: 0.70, height: 0.30 };
const VHF_THIN: Slot = Slot { offset: 0.70, height: 0.15 };

// Overview-page stripes.
const OV_HF: Slot = Slot { offset: -0.3, height: 1.3 };
const OV_VHF: Slot = Slot { offset: 0.80, height: 0.2 };

// Label rows for the detail bands (VSWR data units).
const LOW: f64 = -0.81;
const MID: f64 = -0.4;
const TOP: f64 = 0.1;
const NAME: f64 = 8.1;

// Label rows for the magnified 2 m / 70 cm panels.
const VLOW: f64 = 0.73;
const VMID: f64 = 0.79;
const VTOP: f64 = 0.88;
const VNAME: f64 = 1.85;

const HF_Y_TICKS: &[f64] = &[1.0, 3.0, 5.0, 10.0];
const HF_RANGE: (f64, f64) = (-1.0, 10.0);
const HF_REFS: &[f64] = &[1.0, 3.0];
const VHF_Y_TICKS: &[f64] = &[1.0, 1.5, 2.0];
const VHF_RANGE: (f64, f64) = (0.7, 2.1);

pub static BAND_2200M: Band = Band {
    name: "2200m",
    title: None,
    x_label: None,
    domain: (0.1356, 0.1379),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[0.1357, 0.1374, 0.1376, 0.1378],
    tick_decimals: 4,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 0.1357, 0.13757, FULL),
        seg(Digital, 0.1374, 0.13762, FULL),
        seg(Miscellaneous, 0.1376, 0.1378, FULL), // QRSS
    ],
    labels: &[
        lbl(0.1356, NAME, 10.0, " 2200m"),
        lbl(0.13655, MID, 7.0, "CW"),
        lbl(0.13747, MID, 7.0, "Digi"),
        lbl(0.13765, MID, 7.0, "QRSS"),
    ],
};

pub static BAND_630M: Band = Band {
    name: "630m",
    title: None,
    x_label: None,
    domain: (0.4716, 0.4794),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[0.472, 0.475, 0.479],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 0.472, 0.479, FULL),
        seg(Digital, 0.475, 0.479, LOWER),
    ],
    labels: &[
        lbl(0.4716, NAME, 10.0, " 630m"),
        lbl(0.4735, MID, 7.0, "CW"),
        lbl(0.4768, MID, 7.0, "Digi"),
    ],
};

pub static BAND_160M: Band = Band {
    name: "160m",
    title: None,
    x_label: None,
    domain: (1.79, 2.01),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[1.800, 1.810, 1.840, 2.000],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 1.800, 1.844, FULL),
        seg(Digital, 1.800, 1.810, LOWER),
        seg(Phone, 1.840, 2.000, FULL),
    ],
    labels: &[
        lbl(1.79, NAME, 10.0, " 160m"),
        lbl(1.817, MID, 7.0, "CW"),
        lbl(1.915, MID, 7.0, "LSB"),
        lbl(1.801, LOW, 7.0, "Digi"),
    ],
};

pub static BAND_80M: Band = Band {
    name: "80m",
    title: None,
    x_label: None,
    domain: (3.475, 4.025),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[3.5, 3.58, 3.6, 3.842, 4.0],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 3.500, 3.589, FULL),
        seg(Digital, 3.580, 3.583, FULL),
        seg(Digital, 3.589, 3.6011, FULL),
        seg(Phone, 3.600, 4.000, FULL),
        seg(Television, 3.842, 3.845, FULL),
    ],
    labels: &[
        lbl(3.475, NAME, 10.0, " 80m"),
        lbl(3.536, MID, 7.0, "CW"),
        lbl(3.592, MID, 7.0, "D"),
        lbl(3.725, MID, 7.0, "LSB"),
        lbl(3.839, MID, 7.0, "TV"),
        lbl(3.91, MID, 7.0, "LSB"),
    ],
};

// Five channelized allotments, each stacked CW over USB over digital.
pub static BAND_60M: Band = Band {
    name: "60m",
    title: None,
    x_label: None,
    domain: (5.327, 5.409),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[
        5.3305, 5.3335, 5.3465, 5.3495, 5.3515, 5.3665, 5.3715, 5.3745, 5.4035, 5.4065,
    ],
    tick_decimals: 4,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 5.3305, 5.3335, THIRD_TOP),
        seg(Phone, 5.3305, 5.3335, THIRD_MID),
        seg(Digital, 5.3305, 5.3335, THIRD_LOW),
        seg(Cw, 5.3465, 5.3495, THIRD_TOP),
        seg(Phone, 5.3465, 5.3495, THIRD_MID),
        seg(Digital, 5.3465, 5.3495, THIRD_LOW),
        seg(Cw, 5.3515, 5.3665, THIRD_TOP),
        seg(Phone, 5.3515, 5.3665, THIRD_MID),
        seg(Digital, 5.3515, 5.3665, THIRD_LOW),
        seg(Cw, 5.3715, 5.3745, THIRD_TOP),
        seg(Phone, 5.3715, 5.3745, THIRD_MID),
        seg(Digital, 5.3715, 5.3745, THIRD_LOW),
        seg(Cw, 5.4035, 5.4065, THIRD_TOP),
        seg(Phone, 5.4035, 5.4065, THIRD_MID),
        seg(Digital, 5.4035, 5.4065, THIRD_LOW),
    ],
    labels: &[
        lbl(5.327, NAME, 10.0, " 60m"),
        lbl(5.331, 0.29, 5.0, "CW"),
        lbl(5.331, -0.27, 5.0, "USB"),
        lbl(5.331, -0.91, 5.0, "Digi"),
    ],
};

pub static BAND_40M: Band = Band {
    name: "40m",
    title: None,
    x_label: None,
    domain: (6.985, 7.315),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[7.0, 7.04, 7.07, 7.125, 7.165, 7.175, 7.3],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 7.000, 7.040, FULL),
        seg(Digital, 7.035, 7.040, LOWER),
        seg(Phone, 7.040, 7.300, FULL),
        seg(Digital, 7.070, 7.125, LOWER),
        seg(Television, 7.165, 7.175, FULL),
    ],
    labels: &[
        lbl(6.985, NAME, 10.0, " 40m"),
        lbl(7.015, MID, 7.0, "CW"),
        lbl(7.0355, LOW, 7.0, "D"),
        lbl(7.093, LOW, 7.0, "Digi"),
        lbl(7.105, TOP, 7.0, "LSB"),
        lbl(7.167, MID, 7.0, "TV"),
        lbl(7.23, MID, 7.0, "LSB"),
    ],
};

pub static BAND_30M: Band = Band {
    name: "30m",
    title: None,
    x_label: None,
    domain: (10.097, 10.153),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[10.1, 10.13, 10.14, 10.15],
    tick_decimals: 2,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 10.100, 10.150, FULL),
        seg(Digital, 10.130, 10.140, FULL),
        seg(Digital, 10.140, 10.150, LOWER),
    ],
    labels: &[
        lbl(10.097, NAME, 10.0, " 30m"),
        lbl(10.115, MID, 7.0, "CW"),
        lbl(10.1345, MID, 7.0, "Digi"),
        lbl(10.1445, TOP, 7.0, "CW"),
    ],
};

pub static BAND_20M: Band = Band {
    name: "20m",
    title: None,
    x_label: None,
    domain: (13.98, 14.37),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[14.0, 14.07, 14.112, 14.23, 14.35],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 14.000, 14.070, FULL),
        seg(Digital, 14.070, 14.112, FULL),
        seg(Cw, 14.073, 14.1005, UPPER),
        seg(Phone, 14.112, 14.350, FULL),
        seg(Television, 14.230, 14.236, FULL),
    ],
    labels: &[
        lbl(13.98, NAME, 10.0, " 20m"),
        lbl(14.033, MID, 7.0, "CW"),
        lbl(14.082, TOP, 7.0, "CW"),
        lbl(14.087, LOW, 7.0, "Digi"),
        lbl(14.17, MID, 7.0, "USB"),
        lbl(14.229, MID, 7.0, "TV"),
        lbl(14.28, MID, 7.0, "USB"),
    ],
};

pub static BAND_17M: Band = Band {
    name: "17m",
    title: None,
    x_label: None,
    domain: (18.062, 18.174),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[18.068, 18.095, 18.1, 18.11, 18.168],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 18.068, 18.100, FULL),
        seg(Digital, 18.095, 18.100, LOWER),
        seg(Digital, 18.100, 18.110, FULL),
        seg(Phone, 18.110, 18.168, FULL),
    ],
    labels: &[
        lbl(18.062, NAME, 10.0, " 17m"),
        lbl(18.082, MID, 7.0, "CW"),
        lbl(18.102, MID, 7.0, "Digi"),
        lbl(18.135, MID, 7.0, "USB"),
    ],
};

pub static BAND_15M: Band = Band {
    name: "15m",
    title: None,
    x_label: None,
    domain: (20.975, 21.475),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[21.0, 21.07, 21.125, 21.15, 21.34, 21.45],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 21.000, 21.150, FULL),
        seg(Digital, 21.070, 21.125, FULL),
        seg(Cw, 21.060, 21.080, UPPER),
        seg(Cw, 21.083, 21.086, UPPER),
        seg(Cw, 21.125, 21.150, FULL),
        seg(Phone, 21.150, 21.450, FULL),
        seg(Television, 21.340, 21.343, FULL),
    ],
    labels: &[
        lbl(20.975, NAME, 10.0, " 15m"),
        lbl(21.03, MID, 7.0, "CW"),
        lbl(21.095, MID, 7.0, "Digi"),
        lbl(21.13, MID, 7.0, "CW"),
        lbl(21.24, MID, 7.0, "USB"),
        lbl(21.337, MID, 7.0, "TV"),
        lbl(21.39, MID, 7.0, "USB"),
    ],
};

pub static BAND_12M: Band = Band {
    name: "12m",
    title: None,
    x_label: None,
    domain: (24.884, 24.996),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[24.89, 24.92, 24.925, 24.94, 24.975, 24.99],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 24.890, 24.920, FULL),
        seg(Digital, 24.920, 24.940, FULL),
        seg(Cw, 24.925, 24.940, UPPER),
        seg(Phone, 24.940, 24.990, FULL),
        seg(Television, 24.975, 24.978, FULL),
    ],
    labels: &[
        lbl(24.884, NAME, 10.0, " 12m"),
        lbl(24.904, MID, 7.0, "CW"),
        lbl(24.9205, MID, 7.0, "Digi"),
        lbl(24.93, TOP, 7.0, "CW"),
        lbl(24.956, MID, 7.0, "USB"),
        lbl(24.9755, MID, 7.0, "TV"),
        lbl(24.982, MID, 7.0, "USB"),
    ],
};

pub static BAND_10M: Band = Band {
    name: "10m",
    title: None,
    x_label: None,
    domain: (27.9, 29.8),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[28.0, 28.07, 28.1895, 28.32, 28.68, 29.3, 29.52, 29.7],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Cw, 28.000, 28.352, FULL),
        seg(Digital, 28.070, 28.345, LOWER),
        seg(Beacon, 28.1895, 28.300, LOWER),
        seg(Beacon, 28.1895, 28.2005, FULL),
        seg(Phone, 28.320, 29.700, FULL),
        seg(Television, 28.680, 28.683, FULL),
        seg(Miscellaneous, 29.300, 29.520, FULL), // satellite sub-band
    ],
    labels: &[
        lbl(27.9, NAME, 10.0, " 10m"),
        lbl(28.015, MID, 7.0, "CW"),
        lbl(28.1, LOW, 7.0, "Digi"),
        lbl(28.24, TOP, 7.0, "CW"),
        lbl(28.2, LOW, 7.0, "Beacon"),
        lbl(28.301, LOW, 7.0, "D"),
        lbl(28.47, MID, 7.0, "USB"),
        lbl(28.665, MID, 7.0, "TV"),
        lbl(28.95, MID, 7.0, "USB"),
        lbl(29.39, MID, 7.0, "Sat"),
        lbl(29.59, MID, 7.0, "FM"),
    ],
};

pub static BAND_6M: Band = Band {
    name: "6m",
    title: None,
    x_label: None,
    domain: (49.78, 54.23),
    y_range: HF_RANGE,
    y_ticks: HF_Y_TICKS,
    x_ticks: &[50.0, 50.6, 51.1, 52.0, 53.0, 54.0],
    tick_decimals: 1,
    reference_lines: HF_REFS,
    segments: &[
        seg(Phone, 50.000, 54.000, FULL),
        seg(Cw, 50.000, 50.100, THIRD_LOW),
        seg(Beacon, 50.000, 50.100, THIRD_MID),
        seg(Miscellaneous, 50.600, 51.000, FULL), // experimental
        seg(Cw, 51.000, 51.100, LOWER),
        seg(Digital, 51.100, 52.000, LOWER),
        // Black separators between the repeater sub-ranges.
        seg(Overview, 51.097, 51.102, FULL),
        seg(Overview, 51.997, 52.002, FULL),
        seg(Overview, 52.997, 53.002, FULL),
    ],
    labels: &[
        lbl(49.78, NAME, 10.0, " 6m"),
        lbl(50.25, MID, 7.0, "USB"),
        lbl(50.0, -0.91, 5.0, "CW"),
        lbl(50.0, -0.3, 5.0, "Beac"),
        lbl(50.63, MID, 6.0, "Experimental"),
        lbl(51.0, TOP, 6.0, "DX"),
        lbl(51.0, LOW, 6.0, "CW"),
        lbl(51.35, TOP, 7.0, "FM Simplex"),
        lbl(51.43, LOW, 7.0, "Packet"),
        lbl(52.2, MID, 7.0, "FM Repeater Input"),
        lbl(53.2, MID, 7.0, "FM Repeater Output"),
    ],
};

pub static BAND_2M: Band = Band {
    name: "2m",
    title: None,
    x_label: None,
    domain: (143.9, 148.1),
    y_range: VHF_RANGE,
    y_ticks: VHF_Y_TICKS,
    x_ticks: &[
        144.0, 144.37, 144.51, 144.91, 145.11, 145.51, 145.71, 145.8, 146.02, 146.415, 146.62,
        147.0, 147.42, 147.6, 148.0,
    ],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Miscellaneous, 144.00, 144.37, VHF),
        seg(Digital, 144.37, 144.49, VHF),
        // Repeater groups 1 and 2: input/output pairs, split around the
        // guard gap between the two groups.
        seg(Phone, 144.51, 144.59, VHF),
        seg(Phone, 144.61, 144.89, VHF),
        seg(Phone, 145.11, 145.19, VHF),
        seg(Phone, 145.21, 145.49, VHF),
        seg(Digital, 144.91, 145.09, VHF),
        seg(Digital, 145.51, 145.69, VHF),
        // Repeater groups 3 and 4.
        seg(Phone, 146.02, 146.38, VHF),
        seg(Phone, 146.62, 146.98, VHF),
        seg(Phone, 147.00, 147.38, VHF),
        seg(Phone, 147.60, 147.98, VHF),
        seg(Digital, 145.71, 145.79, VHF), // digital simplex
        seg(Miscellaneous, 145.80, 146.00, VHF), // satellite
        seg(Phone, 146.415, 146.595, VHF), // FM simplex
        seg(Miscellaneous, 147.42, 147.585, VHF), // internet-linked simplex
    ],
    labels: &[
        lbl(143.9, VNAME, 10.0, " 2m"),
        lbl(144.13, VMID, 7.0, "Misc"),
        lbl(144.37, VMID, 7.0, "Digi"),
        lbl(145.115, VTOP, 7.0, "R1"),
        lbl(145.115, VLOW, 7.0, "out"),
        lbl(144.515, VTOP, 7.0, "R1"),
        lbl(144.515, VLOW, 7.0, "in"),
        lbl(145.27, VMID, 7.0, "R2 out"),
        lbl(144.67, VMID, 7.0, "R2 in"),
        lbl(144.91, VTOP, 7.0, "R2"),
        lbl(144.91, VLOW, 7.0, "in"),
        lbl(145.51, VTOP, 7.0, "R2"),
        lbl(145.51, VLOW, 7.0, "out"),
        lbl(145.01, VTOP, 7.0, "R1"),
        lbl(145.01, VLOW, 7.0, "out"),
        lbl(145.61, VTOP, 7.0, "R1"),
        lbl(145.61, VLOW, 7.0, "in"),
        lbl(146.1, VMID, 7.0, "R3 in"),
        lbl(146.7, VMID, 7.0, "R3 out"),
        lbl(147.1, VMID, 7.0, "R4 out"),
        lbl(147.7, VMID, 7.0, "R4 in"),
        lbl(145.71, VMID, 7.0, "Sx"),
        lbl(145.85, VMID, 7.0, "Sat"),
        lbl(146.415, VMID, 7.0, "Sx"),
        lbl(147.42, VTOP, 7.0, "Net Lk"),
        lbl(147.42, VLOW, 7.0, "Sx"),
    ],
};

pub static BAND_70CM: Band = Band {
    name: "70cm",
    title: None,
    x_label: None,
    domain: (429.5, 450.5),
    y_range: VHF_RANGE,
    y_ticks: VHF_Y_TICKS,
    x_ticks: &[
        430.0, 431.0, 431.5, 433.025, 434.025, 435.0, 438.025, 439.05, 440.025, 441.0, 442.0,
        443.025, 445.025, 446.0, 447.0, 448.025, 450.0,
    ],
    tick_decimals: 3,
    reference_lines: HF_REFS,
    segments: &[
        seg(Digital, 430.05, 430.95, VHF), // packet trunked, output
        seg(Digital, 439.05, 439.95, VHF), // packet trunked, input
        seg(Unallocated, 431.0, 431.475, VHF),
        seg(Miscellaneous, 431.5, 433.0, VHF),
        seg(Digital, 433.025, 434.0, VHF),
        seg(Digital, 438.025, 439.0, VHF),
        seg(Phone, 434.025, 434.975, VHF),
        // TODO: the R1 phone input overlaps the packet input allotment;
        // confirm the half-height stripe against the current RAC plan.
        seg(Phone, 439.025, 439.975, VHF_THIN),
        seg(Miscellaneous, 435.0, 438.0, VHF), // satellite
        seg(Digital, 440.025, 440.95, VHF),
        seg(Digital, 445.025, 445.95, VHF),
        seg(Digital, 441.0, 441.975, VHF), // simplex point-to-point links
        seg(Phone, 442.0, 442.975, VHF),
        seg(Phone, 447.0, 447.975, VHF),
        seg(Phone, 443.025, 444.975, VHF),
        seg(Phone, 448.025, 449.975, VHF),
        seg(Phone, 446.0, 446.975, VHF), // FM simplex
    ],
    labels: &[
        lbl(429.5, VNAME, 10.0, " 70cm"),
        lbl(430.05, VTOP, 7.0, "Packet"),
        lbl(430.05, VLOW, 7.0, "Output"),
        lbl(439.05, VTOP, 7.0, "Packet"),
        lbl(439.05, VLOW, 7.0, "Input"),
        lbl(432.0, VMID, 7.0, "Misc"),
        lbl(433.025, VTOP, 7.0, "R1"),
        lbl(433.025, VLOW, 7.0, "Output"),
        lbl(438.025, VTOP, 7.0, "R1"),
        lbl(438.025, VLOW, 7.0, "Input"),
        lbl(434.025, VTOP, 7.0, "R1"),
        lbl(434.025, VLOW, 7.0, "Output"),
        lbl(436.3, VMID, 7.0, "Sat"),
        lbl(440.025, VTOP, 7.0, "Digi"),
        lbl(440.025, VLOW, 7.0, "Output"),
        lbl(445.025, VTOP, 7.0, "Digi"),
        lbl(445.025, VLOW, 7.0, "Input"),
        lbl(440.9, VTOP, 7.0, "Simplex"),
        lbl(441.0, VLOW, 7.0, "Link"),
        lbl(442.0, VTOP, 7.0, "R2"),
        lbl(442.0, VLOW, 7.0, "Output"),
        lbl(447.0, VTOP, 7.0, "R2"),
        lbl(447.0, VLOW, 7.0, "Input"),
        lbl(443.025, VTOP, 7.0, "R3"),
        lbl(443.025, VLOW, 7.0, "Output"),
        lbl(448.025, VTOP, 7.0, "R3"),
        lbl(448.025, VLOW, 7.0, "Input"),
        lbl(446.0, VMID, 7.0, "Simplex"),
    ],
};

pub static OVERVIEW_HF: Band = Band {
    name: "HF",
    title: Some("HF"),
    x_label: Some("freq [MHz]"),
    domain: (0.0, 55.0),
    y_range: (-0.3, 25.0),
    y_ticks: &[1.0, 3.0, 5.0, 10.0, 15.0, 20.0, 25.0],
    x_ticks: &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0],
    tick_decimals: 0,
    reference_lines: &[1.0, 3.0, 10.0],
    segments: &[
        seg(Overview, 1.8, 2.0, OV_HF),
        seg(Overview, 3.5, 4.0, OV_HF),
        seg(Overview, 5.3305, 5.4065, OV_HF),
        seg(Overview, 7.0, 7.3, OV_HF),
        seg(Overview, 10.1, 10.15, OV_HF),
        seg(Overview, 14.0, 14.3, OV_HF),
        seg(Overview, 18.068, 18.168, OV_HF),
        seg(Overview, 21.0, 21.4, OV_HF),
        seg(Overview, 24.89, 24.99, OV_HF),
        seg(Overview, 28.0, 29.7, OV_HF),
        seg(Overview, 50.0, 54.0, OV_HF),
    ],
    labels: &[
        lbl(1.0, -1.0, 7.0, "160m"),
        lbl(3.2, -1.0, 7.0, "80m"),
        lbl(5.05, -1.0, 7.0, "60m"),
        lbl(6.8, -1.0, 7.0, "40m"),
        lbl(10.15, 0.09, 7.0, "<- 30m"),
        lbl(13.7, -1.0, 7.0, "20m"),
        lbl(17.8, -1.0, 7.0, "17m"),
        lbl(20.7, -1.0, 7.0, "15m"),
        lbl(24.6, -1.0, 7.0, "12m"),
        lbl(28.0, -1.0, 7.0, "10m"),
        lbl(51.5, -1.0, 7.0, "6m"),
    ],
};

pub static OVERVIEW_VHF_UHF: Band = Band {
    name: "VHF/UHF",
    title: Some("VHF and UHF"),
    x_label: Some("freq [MHz]"),
    domain: (100.0, 500.0),
    y_range: (0.8, 5.0),
    y_ticks: &[1.0, 1.5, 2.0, 3.0, 5.0],
    x_ticks: &[
        100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0,
    ],
    tick_decimals: 0,
    reference_lines: HF_REFS,
    segments: &[
        seg(Overview, 144.0, 148.0, OV_VHF),
        seg(Overview, 222.0, 225.0, OV_VHF),
        seg(Overview, 430.0, 450.0, OV_VHF),
    ],
    labels: &[
        lbl(138.0, 0.7, 7.0, "2m"),
        lbl(220.0, 0.7, 7.0, "135cm"),
        lbl(430.0, 0.7, 7.0, "70cm"),
    ],
};

/// Every band in the catalog, detail panels first.
pub static ALL_BANDS: &[&Band] = &[
    &BAND_2200M,
    &BAND_630M,
    &BAND_160M,
    &BAND_80M,
    &BAND_60M,
    &BAND_40M,
    &BAND_30M,
    &BAND_20M,
    &BAND_17M,
    &BAND_15M,
    &BAND_12M,
    &BAND_10M,
    &BAND_6M,
    &BAND_2M,
    &BAND_70CM,
    &OVERVIEW_HF,
    &OVERVIEW_VHF_UHF,
];

/// The fifteen detail bands (no overview pseudo-bands).
pub static DETAIL_BANDS: &[&Band] = &[
    &BAND_2200M,
    &BAND_630M,
    &BAND_160M,
    &BAND_80M,
    &BAND_60M,
    &BAND_40M,
    &BAND_30M,
    &BAND_20M,
    &BAND_17M,
    &BAND_15M,
    &BAND_12M,
    &BAND_10M,
    &BAND_6M,
    &BAND_2M,
    &BAND_70CM,
];

/// Check the catalog invariants; returns one message per violation.
///
/// For every segment: `start <= end`, and both ends inside the owning
/// band's domain with a tolerance of 10% of the segment width for
/// intentional edge overdraw.
pub fn validate() -> Vec<String> {
    let mut violations = Vec::new();

    for band in ALL_BANDS {
        let (lo, hi) = band.domain;
        if lo >= hi {
            violations.push(format!("{}: empty domain ({}, {})", band.name, lo, hi));
        }

        for segment in band.segments {
            if segment.start > segment.end {
                violations.push(format!(
                    "{}: segment ({}, {}) is reversed",
                    band.name, segment.start, segment.end
                ));
                continue;
            }
            let eps = 0.1 * (segment.end - segment.start);
            if segment.start < lo - eps || segment.end > hi + eps {
                violations.push(format!(
                    "{}: segment ({}, {}) escapes domain ({}, {})",
                    band.name, segment.start, segment.end, lo, hi
                ));
            }
        }
    }

    violations
}
