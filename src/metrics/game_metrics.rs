use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Play statistics shown in the HUD and written to the log
#[derive(Debug, Default)]
pub struct GameMetrics {
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub foods_eaten: u32,
    pub obstacles_spawned: u32,
    /// Set on the first move of a game; the clock is stopped while `None`
    moving_since: Option<Instant>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the clock; `now` comes from the caller so tests control time
    pub fn update(&mut self, now: Instant) {
        if let Some(since) = self.moving_since {
            self.elapsed_time = now.saturating_duration_since(since);
        }
    }

    pub fn on_game_start(&mut self) {
        self.elapsed_time = Duration::ZERO;
        self.foods_eaten = 0;
        self.obstacles_spawned = 0;
        self.moving_since = None;
    }

    /// Count a tick that happened at `now`
    pub fn on_step(&mut self, result: &StepResult, now: Instant) {
        if result.moved && self.moving_since.is_none() {
            self.moving_since = Some(now);
        }
        self.foods_eaten += u32::from(result.info.ate_food);
        self.obstacles_spawned += u32::from(result.info.obstacle_spawned);
    }

    /// Freeze the clock at the final time and count the game
    pub fn on_game_over(&mut self, now: Instant) {
        self.update(now);
        self.moving_since = None;
        self.games_played += 1;
    }

    /// Elapsed play time as `mm:ss`
    pub fn format_time(&self) -> String {
        let secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::StepInfo;

    fn step(ate_food: bool, obstacle_spawned: bool) -> StepResult {
        StepResult {
            moved: true,
            terminated: false,
            info: StepInfo {
                ate_food,
                obstacle_spawned,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_hud_clock_format() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(59);
        assert_eq!(metrics.format_time(), "00:59");

        metrics.elapsed_time = Duration::from_millis(90_900);
        assert_eq!(metrics.format_time(), "01:30");

        // Minutes are not wrapped into hours
        metrics.elapsed_time = Duration::from_secs(100 * 60 + 7);
        assert_eq!(metrics.format_time(), "100:07");
    }

    #[test]
    fn test_counters() {
        let mut metrics = GameMetrics::new();
        let now = Instant::now();
        metrics.on_step(&step(true, false), now);
        metrics.on_step(&step(false, true), now);
        metrics.on_step(&step(true, false), now);
        assert_eq!(metrics.foods_eaten, 2);
        assert_eq!(metrics.obstacles_spawned, 1);

        metrics.on_game_over(now);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        assert_eq!(metrics.foods_eaten, 0);
        assert_eq!(metrics.obstacles_spawned, 0);
        assert_eq!(metrics.games_played, 1);
    }

    #[test]
    fn test_clock_runs_only_while_moving() {
        let mut metrics = GameMetrics::new();
        let start = Instant::now();
        metrics.update(start + Duration::from_secs(5));
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.on_step(&step(false, false), start);
        metrics.update(start + Duration::from_secs(65));
        assert_eq!(metrics.format_time(), "01:05");

        metrics.on_game_over(start + Duration::from_secs(90));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(90));

        metrics.update(start + Duration::from_secs(200));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(90));
    }

    #[test]
    fn test_clock_starts_on_first_move() {
        let mut metrics = GameMetrics::new();
        let start = Instant::now();
        let idle = StepResult {
            moved: false,
            terminated: false,
            info: StepInfo::default(),
        };
        metrics.on_step(&idle, start);
        metrics.on_step(&step(false, false), start + Duration::from_secs(10));
        metrics.update(start + Duration::from_secs(12));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(2));
    }
}
