//! Currency table used when displaying offer prices.
//!
//! East African currencies come first, then the rest grouped by region.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub region: &'static str,
}

impl Currency {
    const fn new(
        code: &'static str,
        name: &'static str,
        symbol: &'static str,
        region: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            symbol,
            region,
        }
    }
}

pub static CURRENCIES: &[Currency] = &[
    Currency::new("KES", "Kenyan Shilling", "KSh", "East Africa"),
    Currency::new("TZS", "Tanzanian Shilling", "TSh", "East Africa"),
    Currency::new("UGX", "Ugandan Shilling", "USh", "East Africa"),
    Currency::new("RWF", "Rwandan Franc", "FRw", "East Africa"),
    Currency::new("BIF", "Burundian Franc", "FBu", "East Africa"),
    Currency::new("ETB", "Ethiopian Birr", "Br", "East Africa"),
    Currency::new("SOS", "Somali Shilling", "Sh.So.", "East Africa"),
    Currency::new("ERN", "Eritrean Nakfa", "Nfk", "East Africa"),
    Currency::new("DJF", "Djiboutian Franc", "Fdj", "East Africa"),
    Currency::new("SSP", "South Sudanese Pound", "£", "East Africa"),
    Currency::new("ZAR", "South African Rand", "R", "Southern Africa"),
    Currency::new("BWP", "Botswana Pula", "P", "Southern Africa"),
    Currency::new("NAD", "Namibian Dollar", "$", "Southern Africa"),
    Currency::new("SZL", "Swazi Lilangeni", "L", "Southern Africa"),
    Currency::new("LSL", "Lesotho Loti", "L", "Southern Africa"),
    Currency::new("MWK", "Malawian Kwacha", "MK", "Southern Africa"),
    Currency::new("ZMW", "Zambian Kwacha", "ZK", "Southern Africa"),
    Currency::new("MZN", "Mozambican Metical", "MT", "Southern Africa"),
    Currency::new("MGA", "Malagasy Ariary", "Ar", "Southern Africa"),
    Currency::new("MUR", "Mauritian Rupee", "₨", "Southern Africa"),
    Currency::new("SCR", "Seychellois Rupee", "₨", "Southern Africa"),
    Currency::new("KMF", "Comorian Franc", "CF", "Southern Africa"),
    Currency::new("NGN", "Nigerian Naira", "₦", "West Africa"),
    Currency::new("GHS", "Ghanaian Cedi", "GH₵", "West Africa"),
    Currency::new("XOF", "West African CFA Franc", "CFA", "West Africa"),
    Currency::new("GMD", "Gambian Dalasi", "D", "West Africa"),
    Currency::new("GNF", "Guinean Franc", "FG", "West Africa"),
    Currency::new("LRD", "Liberian Dollar", "$", "West Africa"),
    Currency::new("SLL", "Sierra Leonean Leone", "Le", "West Africa"),
    Currency::new("CVE", "Cape Verdean Escudo", "$", "West Africa"),
    Currency::new("XAF", "Central African CFA Franc", "FCFA", "Central Africa"),
    Currency::new("CDF", "Congolese Franc", "FC", "Central Africa"),
    Currency::new("AOA", "Angolan Kwanza", "Kz", "Central Africa"),
    Currency::new("STN", "São Tomé and Príncipe Dobra", "Db", "Central Africa"),
    Currency::new("EGP", "Egyptian Pound", "E£", "North Africa"),
    Currency::new("MAD", "Moroccan Dirham", "DH", "North Africa"),
    Currency::new("TND", "Tunisian Dinar", "د.ت", "North Africa"),
    Currency::new("LYD", "Libyan Dinar", "LD", "North Africa"),
    Currency::new("DZD", "Algerian Dinar", "DA", "North Africa"),
    Currency::new("SDG", "Sudanese Pound", "£", "North Africa"),
    Currency::new("SHP", "Saint Helena Pound", "£", "North Africa"),
    Currency::new("USD", "US Dollar", "$", "North America"),
    Currency::new("EUR", "Euro", "€", "Europe"),
    Currency::new("GBP", "British Pound", "£", "Europe"),
    Currency::new("JPY", "Japanese Yen", "¥", "Asia"),
    Currency::new("CNY", "Chinese Yuan", "¥", "Asia"),
    Currency::new("INR", "Indian Rupee", "₹", "Asia"),
    Currency::new("AUD", "Australian Dollar", "A$", "Oceania"),
    Currency::new("CAD", "Canadian Dollar", "C$", "North America"),
    Currency::new("CHF", "Swiss Franc", "CHF", "Europe"),
    Currency::new("SEK", "Swedish Krona", "kr", "Europe"),
    Currency::new("NOK", "Norwegian Krone", "kr", "Europe"),
    Currency::new("DKK", "Danish Krone", "kr", "Europe"),
    Currency::new("NZD", "New Zealand Dollar", "NZ$", "Oceania"),
    Currency::new("SGD", "Singapore Dollar", "S$", "Asia"),
    Currency::new("HKD", "Hong Kong Dollar", "HK$", "Asia"),
    Currency::new("MXN", "Mexican Peso", "$", "North America"),
    Currency::new("BRL", "Brazilian Real", "R$", "South America"),
    Currency::new("ARS", "Argentine Peso", "$", "South America"),
    Currency::new("CLP", "Chilean Peso", "$", "South America"),
];

/// Look up a currency by its exact ISO code.
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Display symbol for `code`, or the code itself when it is not in the table.
pub fn currency_symbol(code: &str) -> &str {
    match currency_by_code(code) {
        Some(currency) => currency.symbol,
        None => code,
    }
}

/// Currencies grouped by region, regions in order of first appearance.
pub fn currencies_by_region() -> Vec<(&'static str, Vec<&'static Currency>)> {
    let mut groups: Vec<(&'static str, Vec<&'static Currency>)> = Vec::new();
    for currency in CURRENCIES {
        match groups.iter_mut().find(|(region, _)| *region == currency.region) {
            Some((_, members)) => members.push(currency),
            None => groups.push((currency.region, vec![currency])),
        }
    }
    groups
}

/// Symbol followed by the amount with two decimals, e.g. `KSh15.00`.
pub fn format_price(amount: f64, code: &str) -> String {
    format!("{}{:.2}", currency_symbol(code), amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = CURRENCIES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), CURRENCIES.len());
        assert_eq!(CURRENCIES.len(), 60);
    }

    #[test]
    fn symbol_falls_back_to_code() {
        assert_eq!(currency_symbol("KES"), "KSh");
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("XYZ"), "XYZ");
        assert_eq!(currency_symbol("kes"), "kes");
    }

    #[test]
    fn regions_keep_first_appearance_order() {
        let groups = currencies_by_region();
        assert_eq!(groups[0].0, "East Africa");
        assert_eq!(groups[0].1[0].code, "KES");
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, CURRENCIES.len());
        let north_america = groups
            .iter()
            .find(|(region, _)| *region == "North America")
            .expect("region");
        let codes: Vec<&str> = north_america.1.iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["USD", "CAD", "MXN"]);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_price(15.0, "USD"), "$15.00");
        assert_eq!(format_price(250.5, "KES"), "KSh250.50");
        assert_eq!(format_price(3.0, "ZZZ"), "ZZZ3.00");
    }
}
