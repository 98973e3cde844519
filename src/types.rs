/// A single row of the per-sequence hit table.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: String,
    pub accession: Option<String>,
    pub evalue: f64,
    pub bit_score: f64,
    pub bias: f64,
    pub description: Option<String>,
}

/// All hits reported for one query sequence, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub id: String,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub query_id: String,
    pub best_hit_id: String,
    pub evalue: f64,
    pub bit_score: f64,
}

impl SummaryRecord {
    pub const HEADER: &'static str = "query_id\tbest_hit_id\tevalue\tbit_score";

    pub fn format_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{:.2}",
            self.query_id,
            self.best_hit_id,
            format_evalue(self.evalue),
            self.bit_score
        )
    }
}

/// Renders an E-value as the shortest round-trip decimal, switching to
/// scientific notation with a signed two-digit exponent outside [1e-4, 1e16).
pub fn format_evalue(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let plain = format!("{}", value);
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_evalues_use_scientific_notation() {
        assert_eq!(format_evalue(1e-10), "1e-10");
        assert_eq!(format_evalue(1.5e-5), "1.5e-05");
        assert_eq!(format_evalue(3.2e-120), "3.2e-120");
    }

    #[test]
    fn moderate_evalues_use_plain_decimals() {
        assert_eq!(format_evalue(2e-4), "0.0002");
        assert_eq!(format_evalue(0.001), "0.001");
        assert_eq!(format_evalue(12.0), "12.0");
        assert_eq!(format_evalue(0.0), "0.0");
    }

    #[test]
    fn large_evalues_carry_positive_exponent() {
        assert_eq!(format_evalue(1e16), "1e+16");
    }

    #[test]
    fn row_formats_bit_score_to_two_decimals() {
        let record = SummaryRecord {
            query_id: "Q1".to_string(),
            best_hit_id: "S1".to_string(),
            evalue: 1e-10,
            bit_score: 55.3,
        };
        assert_eq!(record.format_row(), "Q1\tS1\t1e-10\t55.30");
    }
}
