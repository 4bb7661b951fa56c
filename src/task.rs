//! Task list
//!
//! Tasks are the work items a mission is run against. Each completed mission
//! adds one pomodoro to its task.

/// Longest task name accepted from the text input
pub const MAX_TASK_NAME_LEN: usize = 40;

/// A single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub pomodoros_completed: u32,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pomodoros_completed: 0,
        }
    }
}

/// Ordered list of tasks owned by the game
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task. Blank names are ignored; returns the new index if added.
    pub fn add(&mut self, name: &str) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.tasks.push(Task::new(name));
        Some(self.tasks.len() - 1)
    }

    /// Remove a task by index, if it still exists
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            log::warn!("Ignoring delete of stale task index {}", index);
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Credit a finished pomodoro to a task. Returns false for a stale index.
    pub fn complete_pomodoro(&mut self, index: usize) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.pomodoros_completed += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_ignored() {
        let mut list = TaskList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert!(list.is_empty());
        assert_eq!(list.add("  write report "), Some(0));
        assert_eq!(list.get(0).map(|t| t.name.as_str()), Some("write report"));
    }

    #[test]
    fn test_remove_is_bounds_checked() {
        let mut list = TaskList::new();
        list.add("a");
        list.add("b");
        assert!(list.remove(5).is_none());
        assert_eq!(list.remove(0).map(|t| t.name), Some("a".to_string()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|t| t.name.as_str()), Some("b"));
    }

    #[test]
    fn test_complete_pomodoro() {
        let mut list = TaskList::new();
        list.add("a");
        assert!(list.complete_pomodoro(0));
        assert!(list.complete_pomodoro(0));
        assert!(!list.complete_pomodoro(1));
        assert_eq!(list.get(0).map(|t| t.pomodoros_completed), Some(2));
    }
}
