//! Text and HTML output for the thread chart.
use std::io::{Result, Write};

use crate::config::{Target, MM_PER_INCH};
use crate::train::Solution;

pub mod html;

/// The error between `pitch` and the goal, as a percentage of the goal
pub fn error_percent(pitch: f64, goal: f64) -> f64 {
    ((pitch - goal).abs() / goal) * 100.0
}

/// Express a pitch, in inches, in the same units as `target`
fn in_units(target: Target, pitch: f64) -> f64 {
    match target {
        Target::Tpi(_) => 1.0 / pitch,
        Target::Mm(_) => pitch * MM_PER_INCH,
    }
}

fn desired(target: Target) -> f64 {
    match target {
        Target::Tpi(tpi) => tpi,
        Target::Mm(mm) => mm,
    }
}

/// Write a plain text description of how close `solution` gets to `target`
pub fn write_text(file: &mut dyn Write, target: Target, solution: Option<&Solution>) -> Result<()> {
    match target {
        Target::Tpi(tpi) => writeln!(file, "desired tpi = {tpi:.6}")?,
        Target::Mm(mm) => writeln!(file, "desired pitch = {mm:.6} mm")?,
    }

    let Some(solution) = solution else {
        writeln!(file, "no solution")?;
        return writeln!(file);
    };

    let actual = in_units(target, solution.pitch);
    match target {
        Target::Tpi(_) => writeln!(file, "actual tpi = {actual:.6}")?,
        Target::Mm(_) => writeln!(file, "actual pitch = {actual:.6} mm")?,
    }
    writeln!(
        file,
        "pitch error = {:.2}%",
        error_percent(solution.pitch, target.goal_pitch())
    )?;
    writeln!(file, "{}", solution.train)?;
    writeln!(file)
}

/// A table row for one target: desired, actual, error and gears
pub fn html_row(target: Target, solution: Option<&Solution>) -> String {
    let mut cells = html::td(&format!("{:.2}", desired(target)));
    match solution {
        Some(s) => {
            cells += &html::td(&format!("{:.3}", in_units(target, s.pitch)));
            cells += &html::td(&format!(
                "{:.2}%",
                error_percent(s.pitch, target.goal_pitch())
            ));
            cells += &html::td(&s.train.to_string());
        }
        None => {
            cells += &html::td_attr("no solution", "colspan=\"3\"");
        }
    }
    html::tr(&cells)
}

/// A complete table, with a header row, for a list of matched targets
pub fn html_table<'a, I>(title: &str, units: &str, rows: I) -> String
where
    I: IntoIterator<Item = (Target, Option<&'a Solution>)>,
{
    let header = html::tr(
        &[
            html::th(&format!("Desired {units}")),
            html::th(&format!("Actual {units}")),
            html::th("Error"),
            html::th("Gears"),
        ]
        .concat(),
    );

    let mut body = vec![header];
    body.extend(rows.into_iter().map(|(t, s)| html_row(t, s)));

    html::h2(title) + "\n" + &html::table_attr(&html::indent(&body.join("\n")), "border=\"1\"")
}

/// Wrap tables into a standalone page
pub fn write_html_page(file: &mut dyn Write, title: &str, tables: &[String]) -> Result<()> {
    let head = html::head(&html::title(title));
    let body = html::body(&html::indent(
        &(html::h1(title) + "\n" + &tables.join("\n")),
    ));
    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "{}", html::html(&html::indent(&(head + "\n" + &body))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::{GearTrain, Layout};

    fn metric_solution() -> Solution {
        Solution::new(GearTrain::new(Layout::Compound5, &[68, 72, 80, 75, 48]).unwrap())
    }

    #[test]
    fn test_text_metric() {
        let mut out = Vec::new();
        let s = metric_solution();
        write_text(&mut out, Target::Mm(1.75), Some(&s)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "desired pitch = 1.750000 mm");
        assert!(lines[1].starts_with("actual pitch = 1.75"));
        assert!(lines[2].starts_with("pitch error = "));
        assert_eq!(lines[3], "68:72-80:75-48");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_text_inch() {
        let mut out = Vec::new();
        let s = Solution::new(GearTrain::new(Layout::Simple, &[40, 50, 40]).unwrap());
        write_text(&mut out, Target::Tpi(12.0), Some(&s)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "desired tpi = 12.000000\nactual tpi = 12.000000\npitch error = 0.00%\n40-50-40\n\n"
        );
    }

    #[test]
    fn test_text_no_solution() {
        let mut out = Vec::new();
        write_text(&mut out, Target::Tpi(8.0), None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "desired tpi = 8.000000\nno solution\n\n"
        );
    }

    #[test]
    fn test_html_row() {
        let s = metric_solution();
        let row = html_row(Target::Mm(1.75), Some(&s));
        assert!(row.starts_with("<tr><td>1.75</td><td>1.75"), "{row}");
        assert!(row.ends_with("<td>68:72-80:75-48</td></tr>"), "{row}");

        let empty = html_row(Target::Tpi(40.0), None);
        assert_eq!(
            empty,
            "<tr><td>40.00</td><td colspan=\"3\">no solution</td></tr>"
        );
    }

    #[test]
    fn test_html_page() {
        let s = metric_solution();
        let table = html_table("Metric", "mm", vec![(Target::Mm(1.75), Some(&s))]);
        let mut out = Vec::new();
        write_html_page(&mut out, "Change Gears", &[table]).unwrap();
        let page = String::from_utf8(out).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(page.contains("<title>Change Gears</title>"));
        assert!(page.contains("<th>Desired mm</th>"));
        assert!(page.contains("68:72-80:75-48"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_error_percent() {
        assert!((error_percent(1.01, 1.0) - 1.0).abs() < 1e-9);
        assert!((error_percent(0.99, 1.0) - 1.0).abs() < 1e-9);
    }
}
