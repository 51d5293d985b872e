/// Observer for a synchronization run. Calls are synchronous and must return promptly.
pub trait ProgressReporter {
    fn start(&mut self, total_stories: usize);
    fn update(&mut self, scenario: &str, story: &str, completed: usize);
    fn finish(&mut self);
}

