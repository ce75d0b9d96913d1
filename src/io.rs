use crate::balancer::BalancingResult;
use crate::model::{Holiday, HolidayId, Participant, ParticipantId, Rank, Response, Survey};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Charge un sondage complet (fériés, participants, réponses) depuis JSON.
pub fn load_survey_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Survey> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let survey: Survey = serde_json::from_slice(&data)
        .with_context(|| format!("parsing survey {}", path.display()))?;
    Ok(survey)
}

/// Import des fériés: header `id,name,date,staff_needed` (date `YYYY-MM-DD`)
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Holiday>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        let date = rec.get(2).context("missing date")?.trim();
        let needed = rec.get(3).context("missing staff_needed")?.trim();
        if name.is_empty() {
            bail!("invalid holiday row (empty name)");
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date for holiday {name}: {date}"))?;
        let staff_needed: u32 = needed
            .parse()
            .with_context(|| format!("invalid staff_needed for holiday {name}: {needed:?}"))?;
        let id = if id.is_empty() {
            HolidayId::random()
        } else {
            HolidayId::new(id)
        };
        out.push(Holiday::new(id, name, date, staff_needed));
    }
    Ok(out)
}

/// Import des participants: header `id,name[,email]`
pub fn import_participants_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Participant>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        let email = rec.get(2).unwrap_or("").trim();
        if name.is_empty() {
            bail!("invalid participant row (empty name)");
        }
        let id = if id.is_empty() {
            ParticipantId::random()
        } else {
            ParticipantId::new(id)
        };
        out.push(Participant::new(id, name, email));
    }
    Ok(out)
}

/// Import des réponses: header `participant_id,holiday_id,rank`, une ligne par classement.
/// Les lignes sont regroupées par participant, dans l'ordre de première apparition ;
/// pour un même couple participant/férié, la première ligne l'emporte.
pub fn import_responses_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Response>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out: Vec<Response> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let participant = rec.get(0).context("missing participant_id")?.trim();
        let holiday = rec.get(1).context("missing holiday_id")?.trim();
        let rank = rec.get(2).context("missing rank")?.trim();
        if participant.is_empty() || holiday.is_empty() {
            bail!("invalid response row (empty)");
        }
        let rank = parse_rank(rank)
            .with_context(|| format!("invalid rank for {participant}/{holiday}"))?;

        let participant = ParticipantId::new(participant);
        let holiday = HolidayId::new(holiday);
        match out.iter_mut().find(|r| r.participant_id == participant) {
            Some(response) => {
                response.rankings.entry(holiday).or_insert(rank);
            }
            None => out.push(Response::new(participant).with_rank(&holiday, rank)),
        }
    }
    Ok(out)
}

fn parse_rank(s: &str) -> anyhow::Result<Rank> {
    match s.to_ascii_lowercase().as_str() {
        "unavailable" | "n/a" | "na" => Ok(Rank::Unavailable),
        other => {
            let raw: i64 = other.parse().context("expected integer rank")?;
            Ok(Rank::try_from(raw)?)
        }
    }
}

/// Export JSON du résultat (jolie mise en forme), écrit de manière atomique.
pub fn export_result_json<P: AsRef<Path>>(path: P, result: &BalancingResult) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(result)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
