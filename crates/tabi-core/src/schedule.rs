//! Day-indexed views over the schedule and completion toggles.
//!
//! Everything here is a pure function: inputs are borrowed, outputs are new
//! values, and no element is ever mutated in place. The toggle operations
//! are copy-on-write at both the sequence and the affected element, which
//! keeps equality-based testing trivial and rules out aliasing surprises in
//! callers that hold on to the previous schedule.

use crate::models::ScheduleItem;

/// Collects every distinct `date` value present in `items`, ascending.
///
/// Dates are compared as opaque strings; because the format is
/// `YYYY-MM-DD`, lexicographic order is also chronological. Malformed
/// dates participate in the sort without validation.
pub fn distinct_dates_sorted(items: &[ScheduleItem]) -> Vec<String> {
    let mut dates: Vec<String> = items.iter().map(|item| item.date.clone()).collect();
    dates.sort();
    dates.dedup();
    dates
}

/// All items whose `date` equals `date`, in original relative order.
///
/// Deliberately does NOT re-sort by time: items render in document order
/// within a day, exactly as they occur in the underlying sequence.
pub fn filter_by_date<'a>(items: &'a [ScheduleItem], date: &str) -> Vec<&'a ScheduleItem> {
    items.iter().filter(|item| item.date == date).collect()
}

/// Case-insensitive substring search across the textual fields of each
/// item: title, location, category, description, business hours, display
/// time, and every checklist entry's text.
///
/// A blank (empty or whitespace-only) term applies no filter and returns
/// every item.
pub fn filter_by_search<'a>(items: &'a [ScheduleItem], term: &str) -> Vec<&'a ScheduleItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| matches_search(item, &needle))
        .collect()
}

/// The day view's mode switch: a non-blank search term searches the whole
/// schedule and ignores the selected date; otherwise the view is the plain
/// date filter.
pub fn visible_for_day<'a>(
    items: &'a [ScheduleItem],
    date: &str,
    term: &str,
) -> Vec<&'a ScheduleItem> {
    if term.trim().is_empty() {
        filter_by_date(items, date)
    } else {
        filter_by_search(items, term)
    }
}

/// Returns a new sequence identical to `items` except that the item with
/// `item_id` has its completion flag flipped.
///
/// Unknown ids are a silent no-op: the result equals the input. When
/// duplicate ids exist only the first match is flipped.
pub fn toggle_item_completion(items: &[ScheduleItem], item_id: &str) -> Vec<ScheduleItem> {
    let mut toggled = false;
    items
        .iter()
        .map(|item| {
            if !toggled && item.id == item_id {
                toggled = true;
                ScheduleItem {
                    is_completed: !item.is_completed,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Returns a new sequence where the checklist entry `check_id` inside the
/// item `item_id` has its completion flag flipped.
///
/// A silent no-op when either id is missing. Sibling checklist entries and
/// every other schedule item come back unchanged.
pub fn toggle_checklist_item(
    items: &[ScheduleItem],
    item_id: &str,
    check_id: &str,
) -> Vec<ScheduleItem> {
    let mut toggled = false;
    items
        .iter()
        .map(|item| {
            if !toggled && item.id == item_id {
                toggled = true;
                let mut flipped_entry = false;
                let check_list = item
                    .check_list
                    .iter()
                    .map(|entry| {
                        if !flipped_entry && entry.id == check_id {
                            flipped_entry = true;
                            let mut entry = entry.clone();
                            entry.is_completed = !entry.is_completed;
                            entry
                        } else {
                            entry.clone()
                        }
                    })
                    .collect();
                ScheduleItem {
                    check_list,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

fn matches_search(item: &ScheduleItem, needle: &str) -> bool {
    let mut haystacks = vec![
        item.title.as_str(),
        item.location.as_str(),
        item.category.as_str(),
    ];
    if let Some(description) = item.description.as_deref() {
        haystacks.push(description);
    }
    if let Some(hours) = item.business_hours.as_deref() {
        haystacks.push(hours);
    }
    if let Some(display_time) = item.display_time.as_deref() {
        haystacks.push(display_time);
    }
    haystacks
        .into_iter()
        .chain(item.check_list.iter().map(|entry| entry.text.as_str()))
        .any(|text| text.to_lowercase().contains(needle))
}
