use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::model::RoundSnapshot;
use crate::mvu::error::AppError;

/// Renders the card as CSV: a hole-number header, a `Par` row and one row of
/// gross scores per active player. Unplayed holes are left blank.
///
/// # Errors
///
/// Returns `AppError::Io` if the CSV writer fails.
pub fn export_csv(snapshot: &RoundSnapshot) -> Result<String, AppError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Hole".to_string()];
    header.extend((1..=snapshot.num_holes).map(|h| h.to_string()));
    header.push("Total".to_string());
    wtr.write_record(&header)?;

    let mut par_row = vec!["Par".to_string()];
    par_row.extend(snapshot.pars.iter().map(ToString::to_string));
    par_row.push(snapshot.total_par().to_string());
    wtr.write_record(&par_row)?;

    for player in snapshot.active_players() {
        let mut row = vec![player.name.clone()];
        row.extend((0..snapshot.num_holes).map(|hole| match player.score_at(hole) {
            0 => String::new(),
            s => s.to_string(),
        }));
        let total: i32 = player.scores.iter().take(snapshot.num_holes).sum();
        row.push(total.to_string());
        wtr.write_record(&row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Io(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}

/// The course label with every run of non-alphanumeric characters collapsed
/// to a hyphen, `scorecard` when nothing is left.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn course_slug(course: &str) -> String {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"[^A-Za-z0-9]+").expect("Invalid regex pattern - this is a programming error")
    });

    let slug = re.replace_all(course, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "scorecard".to_string()
    } else {
        slug.to_string()
    }
}

#[must_use]
pub fn csv_filename(course: &str) -> String {
    format!("{}.csv", course_slug(course))
}

/// # Errors
///
/// Returns `AppError::Io` if the file cannot be written.
pub fn write_csv(snapshot: &RoundSnapshot, path: &Path) -> Result<(), AppError> {
    let contents = export_csv(snapshot)?;
    std::fs::write(path, contents)?;
    Ok(())
}
