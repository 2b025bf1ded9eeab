use crate::analyzers::types::StationRecord;

/// Jakarta MRT North-South line: (name, code, cumulative distance in metres).
static NORTH_SOUTH_LINE: &[(&str, &str, f64)] = &[
    ("Depo", "DPO", 0.0),
    ("Lebakbulus", "LBB", 329.0),
    ("Fatmawati", "FTW", 2347.0),
    ("Cipeteraya", "CPR", 4158.0),
    ("Haji Nawi", "HJN", 5456.0),
    ("Blok A", "BLA", 6672.0),
    ("Blok M", "BLM", 7843.0),
    ("ASEAN", "ASN", 8570.0),
    ("Senayan", "SNY", 10089.0),
    ("Istora", "IST", 10903.0),
    ("Bendunganhilir", "BNH", 12218.0),
    ("Setiabudi", "SET", 13001.0),
    ("Dukuh Atas", "DKA", 13917.0),
    ("Bundaran HI", "BHI", 14983.0),
];

/// Reference station table used when no station CSV is supplied.
pub fn north_south_line() -> Vec<StationRecord> {
    NORTH_SOUTH_LINE
        .iter()
        .map(|&(name, code, distance)| StationRecord::new(code, name, distance))
        .collect()
}
