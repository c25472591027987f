/// Approximate country centroid used to place a marker on the world map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn c(alpha2: &'static str, alpha3: &'static str, latitude: f64, longitude: f64) -> Centroid {
    Centroid {
        alpha2,
        alpha3,
        latitude,
        longitude,
    }
}

static CENTROIDS: &[Centroid] = &[
    c("AF", "AFG", 33.9, 67.7),
    c("AL", "ALB", 41.2, 20.2),
    c("DZ", "DZA", 28.0, 1.7),
    c("AD", "AND", 42.5, 1.6),
    c("AO", "AGO", -11.2, 17.9),
    c("AG", "ATG", 17.1, -61.8),
    c("AR", "ARG", -38.4, -63.6),
    c("AM", "ARM", 40.1, 45.0),
    c("AU", "AUS", -25.3, 133.8),
    c("AT", "AUT", 47.5, 14.6),
    c("AZ", "AZE", 40.1, 47.6),
    c("BS", "BHS", 25.0, -77.4),
    c("BH", "BHR", 26.0, 50.6),
    c("BD", "BGD", 23.7, 90.4),
    c("BB", "BRB", 13.2, -59.5),
    c("BY", "BLR", 53.7, 28.0),
    c("BE", "BEL", 50.5, 4.5),
    c("BZ", "BLZ", 17.2, -88.5),
    c("BJ", "BEN", 9.3, 2.3),
    c("BT", "BTN", 27.5, 90.4),
    c("BO", "BOL", -16.3, -63.6),
    c("BA", "BIH", 43.9, 17.7),
    c("BW", "BWA", -22.3, 24.7),
    c("BR", "BRA", -14.2, -51.9),
    c("BN", "BRN", 4.5, 114.7),
    c("BG", "BGR", 42.7, 25.5),
    c("BF", "BFA", 12.2, -1.6),
    c("BI", "BDI", -3.4, 29.9),
    c("CV", "CPV", 16.0, -24.0),
    c("KH", "KHM", 12.6, 105.0),
    c("CM", "CMR", 7.4, 12.4),
    c("CA", "CAN", 56.1, -106.3),
    c("CF", "CAF", 6.6, 20.9),
    c("TD", "TCD", 15.5, 18.7),
    c("CL", "CHL", -35.7, -71.5),
    c("CN", "CHN", 35.9, 104.2),
    c("CO", "COL", 4.6, -74.3),
    c("KM", "COM", -11.9, 43.9),
    c("CG", "COG", -0.2, 15.8),
    c("CD", "COD", -4.0, 21.8),
    c("CR", "CRI", 9.7, -83.8),
    c("CI", "CIV", 7.5, -5.5),
    c("HR", "HRV", 45.1, 15.2),
    c("CU", "CUB", 21.5, -77.8),
    c("CY", "CYP", 35.1, 33.4),
    c("CZ", "CZE", 49.8, 15.5),
    c("DK", "DNK", 56.3, 9.5),
    c("DJ", "DJI", 11.8, 42.6),
    c("DM", "DMA", 15.4, -61.4),
    c("DO", "DOM", 18.7, -70.2),
    c("EC", "ECU", -1.8, -78.2),
    c("EG", "EGY", 26.8, 30.8),
    c("SV", "SLV", 13.8, -88.9),
    c("GQ", "GNQ", 1.7, 10.3),
    c("ER", "ERI", 15.2, 39.8),
    c("EE", "EST", 58.6, 25.0),
    c("SZ", "SWZ", -26.5, 31.5),
    c("ET", "ETH", 9.1, 40.5),
    c("FJ", "FJI", -17.7, 178.1),
    c("FI", "FIN", 61.9, 25.7),
    c("FR", "FRA", 46.2, 2.2),
    c("GA", "GAB", -0.8, 11.6),
    c("GM", "GMB", 13.4, -15.3),
    c("GE", "GEO", 42.3, 43.4),
    c("DE", "DEU", 51.2, 10.5),
    c("GH", "GHA", 7.9, -1.0),
    c("GR", "GRC", 39.1, 21.8),
    c("GD", "GRD", 12.1, -61.7),
    c("GT", "GTM", 15.8, -90.2),
    c("GN", "GIN", 9.9, -9.7),
    c("GW", "GNB", 11.8, -15.2),
    c("GY", "GUY", 4.9, -58.9),
    c("HT", "HTI", 19.0, -72.3),
    c("VA", "VAT", 41.9, 12.5),
    c("HN", "HND", 15.2, -86.2),
    c("HU", "HUN", 47.2, 19.5),
    c("IS", "ISL", 65.0, -19.0),
    c("IN", "IND", 20.6, 79.0),
    c("ID", "IDN", -0.8, 113.9),
    c("IR", "IRN", 32.4, 53.7),
    c("IQ", "IRQ", 33.2, 43.7),
    c("IE", "IRL", 53.4, -8.2),
    c("IL", "ISR", 31.0, 34.9),
    c("IT", "ITA", 41.9, 12.6),
    c("JM", "JAM", 18.1, -77.3),
    c("JP", "JPN", 36.2, 138.3),
    c("JO", "JOR", 30.6, 36.2),
    c("KZ", "KAZ", 48.0, 66.9),
    c("KE", "KEN", 0.0, 37.9),
    c("KI", "KIR", -3.4, -168.7),
    c("KP", "PRK", 40.3, 127.5),
    c("KR", "KOR", 35.9, 127.8),
    c("XK", "XKX", 42.6, 20.9),
    c("KW", "KWT", 29.3, 47.5),
    c("KG", "KGZ", 41.2, 74.8),
    c("LA", "LAO", 19.9, 102.5),
    c("LV", "LVA", 56.9, 24.6),
    c("LB", "LBN", 33.9, 35.9),
    c("LS", "LSO", -29.6, 28.2),
    c("LR", "LBR", 6.4, -9.4),
    c("LY", "LBY", 26.3, 17.2),
    c("LI", "LIE", 47.2, 9.6),
    c("LT", "LTU", 55.2, 23.9),
    c("LU", "LUX", 49.8, 6.1),
    c("MG", "MDG", -18.8, 46.9),
    c("MW", "MWI", -13.3, 34.3),
    c("MY", "MYS", 4.2, 102.0),
    c("MV", "MDV", 3.2, 73.2),
    c("ML", "MLI", 17.6, -4.0),
    c("MT", "MLT", 35.9, 14.4),
    c("MH", "MHL", 7.1, 171.2),
    c("MR", "MRT", 21.0, -10.9),
    c("MU", "MUS", -20.3, 57.6),
    c("MX", "MEX", 23.6, -102.6),
    c("FM", "FSM", 7.4, 150.6),
    c("MD", "MDA", 47.4, 28.4),
    c("MC", "MCO", 43.7, 7.4),
    c("MN", "MNG", 46.9, 103.8),
    c("ME", "MNE", 42.7, 19.4),
    c("MA", "MAR", 31.8, -7.1),
    c("MZ", "MOZ", -18.7, 35.5),
    c("MM", "MMR", 21.9, 95.9),
    c("NA", "NAM", -23.0, 18.5),
    c("NR", "NRU", -0.5, 166.9),
    c("NP", "NPL", 28.4, 84.1),
    c("NL", "NLD", 52.1, 5.3),
    c("NZ", "NZL", -40.9, 174.9),
    c("NI", "NIC", 12.9, -85.2),
    c("NE", "NER", 17.6, 8.1),
    c("NG", "NGA", 9.1, 8.7),
    c("MK", "MKD", 41.6, 21.7),
    c("NO", "NOR", 60.5, 8.5),
    c("OM", "OMN", 21.5, 55.9),
    c("PK", "PAK", 30.4, 69.3),
    c("PW", "PLW", 7.5, 134.6),
    c("PS", "PSE", 31.9, 35.2),
    c("PA", "PAN", 8.5, -80.8),
    c("PG", "PNG", -6.3, 143.9),
    c("PY", "PRY", -23.4, -58.4),
    c("PE", "PER", -9.2, -75.0),
    c("PH", "PHL", 12.9, 121.8),
    c("PL", "POL", 51.9, 19.1),
    c("PT", "PRT", 39.4, -8.2),
    c("QA", "QAT", 25.4, 51.2),
    c("RO", "ROU", 45.9, 25.0),
    c("RU", "RUS", 61.5, 105.3),
    c("RW", "RWA", -1.9, 29.9),
    c("KN", "KNA", 17.4, -62.8),
    c("LC", "LCA", 13.9, -61.0),
    c("VC", "VCT", 13.3, -61.2),
    c("WS", "WSM", -13.8, -172.1),
    c("SM", "SMR", 43.9, 12.5),
    c("ST", "STP", 0.2, 6.6),
    c("SA", "SAU", 23.9, 45.1),
    c("SN", "SEN", 14.5, -14.5),
    c("RS", "SRB", 44.0, 21.0),
    c("SC", "SYC", -4.7, 55.5),
    c("SL", "SLE", 8.5, -11.8),
    c("SG", "SGP", 1.4, 103.8),
    c("SK", "SVK", 48.7, 19.7),
    c("SI", "SVN", 46.2, 15.0),
    c("SB", "SLB", -9.6, 160.2),
    c("SO", "SOM", 5.2, 46.2),
    c("ZA", "ZAF", -30.6, 22.9),
    c("SS", "SSD", 6.9, 31.3),
    c("ES", "ESP", 40.5, -3.7),
    c("LK", "LKA", 7.9, 80.8),
    c("SD", "SDN", 12.9, 30.2),
    c("SR", "SUR", 3.9, -56.0),
    c("SE", "SWE", 60.1, 18.6),
    c("CH", "CHE", 46.8, 8.2),
    c("SY", "SYR", 34.8, 39.0),
    c("TW", "TWN", 23.7, 121.0),
    c("TJ", "TJK", 38.9, 71.3),
    c("TZ", "TZA", -6.4, 34.9),
    c("TH", "THA", 15.9, 101.0),
    c("TL", "TLS", -8.9, 125.7),
    c("TG", "TGO", 8.6, 0.8),
    c("TO", "TON", -21.2, -175.2),
    c("TT", "TTO", 10.7, -61.2),
    c("TN", "TUN", 33.9, 9.5),
    c("TR", "TUR", 39.0, 35.2),
    c("TM", "TKM", 38.97, 59.6),
    c("TV", "TUV", -7.1, 177.6),
    c("UG", "UGA", 1.4, 32.3),
    c("UA", "UKR", 48.4, 31.2),
    c("AE", "ARE", 23.4, 53.8),
    c("GB", "GBR", 55.4, -3.4),
    c("US", "USA", 37.1, -95.7),
    c("UY", "URY", -32.5, -55.8),
    c("UZ", "UZB", 41.4, 64.6),
    c("VU", "VUT", -15.4, 166.9),
    c("VE", "VEN", 6.4, -66.6),
    c("VN", "VNM", 14.1, 108.3),
    c("YE", "YEM", 15.6, 48.5),
    c("ZM", "ZMB", -13.1, 27.8),
    c("ZW", "ZWE", -19.0, 29.2),
    c("HK", "HKG", 22.3, 114.2),
    c("MO", "MAC", 22.2, 113.5),
    c("PR", "PRI", 18.2, -66.6),
    c("GL", "GRL", 71.7, -42.6),
];

/// Looks a country code up by ISO-3166 alpha-3, falling back to alpha-2.
/// Matching ignores case and surrounding whitespace.
pub fn locate(code: &str) -> Option<&'static Centroid> {
    let code = code.trim();
    match code.len() {
        3 => CENTROIDS
            .iter()
            .find(|entry| entry.alpha3.eq_ignore_ascii_case(code)),
        2 => CENTROIDS
            .iter()
            .find(|entry| entry.alpha2.eq_ignore_ascii_case(code)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_locate_by_alpha3_and_alpha2() {
        let usa = locate("USA");
        let us = locate("us");
        assert!(usa.is_some());
        assert_eq!(usa, us);
        assert_eq!(locate("IND").map(|c| c.alpha2), Some("IN"));
    }

    #[test]
    fn test_locate_unknown() {
        assert!(locate("ZZZ").is_none());
        assert!(locate("").is_none());
        assert!(locate("BRAZIL").is_none());
    }

    #[test]
    fn test_table_is_consistent() {
        let mut alpha2 = HashSet::new();
        let mut alpha3 = HashSet::new();
        for entry in CENTROIDS {
            assert!(alpha2.insert(entry.alpha2), "duplicate {}", entry.alpha2);
            assert!(alpha3.insert(entry.alpha3), "duplicate {}", entry.alpha3);
            assert!((-90.0..=90.0).contains(&entry.latitude));
            assert!((-180.0..=180.0).contains(&entry.longitude));
        }
    }
}
