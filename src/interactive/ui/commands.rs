use crate::interactive::domain::models::SearchRequest;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(Duration), // restart the debounce timer
    ExecuteSearch(SearchRequest),
    Shutdown,
}
