use super::AssignmentRecord;
use crate::model::Holiday;

/// Fériés par date croissante ; à date égale, l'ordre d'entrée est conservé.
pub(super) fn chronological(holidays: &[Holiday]) -> Vec<&Holiday> {
    let mut ordered: Vec<&Holiday> = holidays.iter().collect();
    ordered.sort_by_key(|h| h.date);
    ordered
}

pub(super) fn empty_record(holiday: &Holiday) -> AssignmentRecord {
    AssignmentRecord {
        holiday_id: holiday.id.clone(),
        holiday_name: holiday.name.clone(),
        date: holiday.date,
        staff_needed: holiday.staff_needed,
        assigned_staff: Vec::new(),
        unassigned_count: holiday.staff_needed,
    }
}

pub(super) fn unmet_message(record: &AssignmentRecord) -> String {
    format!(
        "{} ({}): {} staff still needed",
        record.holiday_name,
        record.date.format("%Y-%m-%d"),
        record.unassigned_count
    )
}
