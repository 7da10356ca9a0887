//! Plain-text layout of a report.

use crate::render::Report;
use std::fmt;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
            writeln!(f, "{}", "=".repeat(title.chars().count()))?;
        }

        if !self.envelope.is_empty() {
            writeln!(f, "Envelope")?;
            let width = label_width(self.envelope.iter().map(|e| e.label.as_str()));
            writeln!(
                f,
                "  {:<width$}  {:>12}  {:>12}  {:>12}",
                "element", "A [m²]", "U·A [W/K]", "b·U·A [W/K]"
            )?;
            for line in &self.envelope {
                writeln!(
                    f,
                    "  {:<width$}  {:>12}  {:>12}  {:>12}",
                    line.label, line.area, line.ua, line.bua
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Results")?;
        let width = label_width(self.fields.iter().map(|l| l.label));
        for line in &self.fields {
            writeln!(
                f,
                "  {:<width$}  {:<9} {:>14}  {}",
                line.label, line.symbol, line.value, line.unit
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Solar gains [kWh/a]")?;
        for line in &self.solar_gains {
            writeln!(f, "  {:<6} {:>14}", line.orientation, line.gain)?;
        }
        writeln!(f)?;

        writeln!(f, "Compliance")?;
        for line in &self.compliance {
            let verdict = if line.compliant {
                "compliant"
            } else {
                "non-compliant"
            };
            writeln!(
                f,
                "  {:<18} {:>10} {} {:<10} {}",
                line.check, line.actual, line.symbol, line.target, verdict
            )?;
        }
        Ok(())
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}
