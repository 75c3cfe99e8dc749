use serde::Serialize;

/// A known host/accelerator link and its theoretical one-direction bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterfaceProfile {
    pub name: &'static str,
    pub theoretical_gbps: f64,
    pub description: &'static str,
}

const fn profile(name: &'static str, theoretical_gbps: f64, description: &'static str) -> InterfaceProfile {
    InterfaceProfile {
        name,
        theoretical_gbps,
        description,
    }
}

/// Reference links ordered from PCIe generations to external enclosures.  Classification ties resolve to the
/// earlier entry.
pub static REFERENCE_PROFILES: [InterfaceProfile; 20] = [
    profile("PCIe 3.0 x1", 0.985, "8 GT/s, 128b/130b, single lane"),
    profile("PCIe 3.0 x4", 3.94, "8 GT/s, 128b/130b, four lanes"),
    profile("PCIe 3.0 x8", 7.88, "8 GT/s, 128b/130b, eight lanes"),
    profile("PCIe 3.0 x16", 15.75, "8 GT/s, 128b/130b, full-width slot"),
    profile("PCIe 4.0 x1", 1.97, "16 GT/s, 128b/130b, single lane"),
    profile("PCIe 4.0 x4", 7.88, "16 GT/s, 128b/130b, four lanes"),
    profile("PCIe 4.0 x8", 15.75, "16 GT/s, 128b/130b, eight lanes"),
    profile("PCIe 4.0 x16", 31.5, "16 GT/s, 128b/130b, full-width slot"),
    profile("PCIe 5.0 x1", 3.94, "32 GT/s, 128b/130b, single lane"),
    profile("PCIe 5.0 x4", 15.75, "32 GT/s, 128b/130b, four lanes"),
    profile("PCIe 5.0 x8", 31.5, "32 GT/s, 128b/130b, eight lanes"),
    profile("PCIe 5.0 x16", 63.0, "32 GT/s, 128b/130b, full-width slot"),
    profile("Thunderbolt 3", 2.75, "40 Gb/s link, PCIe 3.0 x4 tunnel capped at 22 Gb/s of data"),
    profile("Thunderbolt 4", 3.0, "40 Gb/s link, PCIe 3.0 x4 tunnel at 32 Gb/s with controller overhead"),
    profile("Thunderbolt 5", 8.0, "80 Gb/s link, PCIe 4.0 x4 tunnel at 64 Gb/s"),
    profile("USB 3.2 Gen 2", 1.25, "10 Gb/s"),
    profile("USB 3.2 Gen 2x2", 2.5, "20 Gb/s"),
    profile("USB4 40Gbps", 5.0, "40 Gb/s USB4 with PCIe tunnelling"),
    profile("OCuLink PCIe 3.0 x4", 3.94, "SFF-8611 cable, PCIe 3.0 x4"),
    profile("OCuLink PCIe 4.0 x4", 7.88, "SFF-8611 cable, PCIe 4.0 x4"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sane() {
        assert_eq!(REFERENCE_PROFILES.len(), 20);
        for p in REFERENCE_PROFILES.iter() {
            assert!(p.theoretical_gbps > 0.0, "{}", p.name);
            assert!(!p.description.is_empty());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = REFERENCE_PROFILES.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REFERENCE_PROFILES.len());
    }
}
