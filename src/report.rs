//! Text rendering for roster, queue and search results

use crate::lookup::SearchField;
use crate::queue::EnrollmentQueue;
use crate::roster::{Roster, StudentRecord};

/// Grades joined with ", "
pub fn format_grades(grades: &[f64]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "Student Found:" block for a search hit
pub fn student_details(record: &StudentRecord) -> String {
    format!(
        "Student Found:\nName: {}\nID: {}\nCourse: {}\nGrades: {}\nAvg Grade: {:.2}",
        record.name,
        record.id,
        record.course,
        format_grades(&record.grades),
        record.average()
    )
}

/// Not-found text echoing what was searched
pub fn not_found(term: &str, field: SearchField) -> String {
    format!(
        "Student not found.\nSearched for: {} (by {})",
        term.trim().to_lowercase(),
        field
    )
}

/// Numbered listing of every student with course, grades and average
pub fn roster_listing(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No students in the system. Add students first.".to_string();
    }

    let mut out = format!("Total Students: {}\n", roster.len());
    for (index, student) in roster.iter().enumerate() {
        let grades = if student.grades.is_empty() {
            "No grades".to_string()
        } else {
            format_grades(&student.grades)
        };
        out.push_str(&format!(
            "\n{}. {} (ID: {})\n   Course: {}\n   Grades: {}\n   Average: {:.2}\n",
            index + 1,
            student.name,
            student.id,
            student.course,
            grades,
            student.average()
        ));
    }
    out
}

/// Numbered queue listing, head first
pub fn queue_listing(queue: &EnrollmentQueue) -> String {
    if queue.is_empty() {
        return "Queue is empty.".to_string();
    }
    queue
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry.name))
        .collect::<Vec<_>>()
        .join("\n")
}
