/// Static reference data: never derived from input, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentOption {
    pub name: &'static str,
    pub description: &'static str,
    /// Expected annual return, in percent.
    pub expected_return: f64,
}

/// The suggestion catalog, in display order.
pub const CATALOG: &[(&str, &[InvestmentOption])] = &[
    (
        "Mutual Funds",
        &[
            InvestmentOption {
                name: "SBI Bluechip Fund",
                description: "Large-cap equity fund with solid track record",
                expected_return: 12.5,
            },
            InvestmentOption {
                name: "HDFC Mid-Cap Opportunities Fund",
                description: "Mid-cap focused growth fund",
                expected_return: 15.8,
            },
            InvestmentOption {
                name: "Axis Long Term Equity Fund",
                description: "Tax-saving ELSS fund",
                expected_return: 14.2,
            },
            InvestmentOption {
                name: "Kotak Standard Multicap Fund",
                description: "Multi-cap equity fund",
                expected_return: 13.7,
            },
        ],
    ),
    (
        "Stocks",
        &[
            InvestmentOption {
                name: "Reliance Industries (RELIANCE.NSE)",
                description: "Oil, retail, and telecom conglomerate",
                expected_return: 11.3,
            },
            InvestmentOption {
                name: "HDFC Bank (HDFCBANK.BSE)",
                description: "Leading private sector bank",
                expected_return: 16.5,
            },
            InvestmentOption {
                name: "Infosys (INFY.NSE)",
                description: "IT services giant",
                expected_return: 14.8,
            },
            InvestmentOption {
                name: "TCS (TCS.NSE)",
                description: "India's largest IT company",
                expected_return: 13.9,
            },
        ],
    ),
    (
        "Gold & Silver",
        &[
            InvestmentOption {
                name: "Physical Gold",
                description: "Gold coins or jewelry",
                expected_return: 9.2,
            },
            InvestmentOption {
                name: "Sovereign Gold Bond",
                description: "Government-backed gold investment",
                expected_return: 8.5,
            },
            InvestmentOption {
                name: "Gold ETF",
                description: "Exchange-traded fund tracking gold prices",
                expected_return: 7.8,
            },
            InvestmentOption {
                name: "Silver ETF",
                description: "Exchange-traded fund for silver",
                expected_return: 10.2,
            },
        ],
    ),
    (
        "Bonds",
        &[
            InvestmentOption {
                name: "Government Securities",
                description: "Issued by RBI, highly secure",
                expected_return: 7.3,
            },
            InvestmentOption {
                name: "Corporate Bonds (AAA)",
                description: "High-rated corporate bonds",
                expected_return: 8.9,
            },
            InvestmentOption {
                name: "Fixed Deposits",
                description: "Bank FDs with guaranteed returns",
                expected_return: 6.5,
            },
            InvestmentOption {
                name: "Public Sector Bonds",
                description: "Bonds issued by PSUs",
                expected_return: 7.8,
            },
        ],
    ),
];

pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

/// Exact-name lookup into the catalog.
pub fn options_for(category: &str) -> Option<&'static [InvestmentOption]> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, options)| *options)
}

/// What the whole balance would grow to after one year in this option.
pub fn projected_value(balance: f64, option: &InvestmentOption) -> f64 {
    balance * (1.0 + option.expected_return / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let names: Vec<&str> = category_names().collect();
        assert_eq!(names, vec!["Mutual Funds", "Stocks", "Gold & Silver", "Bonds"]);
        for (_, options) in CATALOG {
            assert_eq!(options.len(), 4);
        }
    }

    #[test]
    fn test_options_lookup() {
        let bonds = options_for("Bonds").unwrap();
        assert_eq!(bonds[0].name, "Government Securities");
        assert_eq!(options_for("bonds"), None);
        assert_eq!(options_for("Crypto"), None);
    }

    #[test]
    fn test_projected_value_scales_balance() {
        let option = InvestmentOption {
            name: "x",
            description: "y",
            expected_return: 10.0,
        };
        assert_eq!(projected_value(1000.0, &option), 1100.0);
        assert_eq!(projected_value(0.0, &option), 0.0);
    }
}
