use super::{TimeStepPlan, FRONT_LEVEL};
use russell_lab::format_nanoseconds;

/// Holds the (time-loop) options to control the simulation
#[derive(Clone, Debug)]
pub struct Control {
    /// Final time
    pub t_fin: f64,

    /// Stability factor f = D Δt / h² (None means the solver default)
    pub stability_factor: Option<f64>,

    /// Times at which a copy of the field is saved (ascending)
    pub t_snapshots: Vec<f64>,

    /// Number of time steps between front-position samples (zero disables the sampling)
    pub n_front_interval: usize,

    /// Saturation level identifying the front
    pub front_level: f64,

    /// Checks the discrete mass balance at every time step
    pub track_mass_balance: bool,

    /// Verbose mode during timesteps
    pub verbose: bool,
}

impl Control {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Control {
            t_fin: 1.0,
            stability_factor: None,
            t_snapshots: Vec::new(),
            n_front_interval: 50,
            front_level: FRONT_LEVEL,
            track_mass_balance: false,
            verbose: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.t_fin > 0.0) || !self.t_fin.is_finite() {
            return Some(format!("t_fin = {:?} is incorrect; it must be > 0.0", self.t_fin));
        }
        if let Some(f) = self.stability_factor {
            if !(f > 0.0) {
                return Some(format!("stability_factor = {:?} is incorrect; it must be > 0.0", f));
            }
        }
        for i in 0..self.t_snapshots.len() {
            let t = self.t_snapshots[i];
            if !(t >= 0.0) {
                return Some(format!("t_snapshots[{}] = {:?} is incorrect; it must be ≥ 0.0", i, t));
            }
            if i > 0 && t <= self.t_snapshots[i - 1] {
                return Some(format!(
                    "t_snapshots[{}] = {:?} is incorrect; the times must be in ascending order",
                    i, t
                ));
            }
        }
        if !self.front_level.is_finite() {
            return Some(format!("front_level = {:?} is incorrect", self.front_level));
        }
        None // all good
    }

    /// Returns the stability factor or the given default value
    pub fn factor_or(&self, default: f64) -> f64 {
        self.stability_factor.unwrap_or(default)
    }

    /// Prints the time-step plan
    #[inline]
    pub fn print_plan(&self, name: &str, npoint: usize, h: f64, plan: &TimeStepPlan) {
        if !self.verbose {
            return;
        }
        let line = format!("{:─^1$}", "", 60);
        println!("{}", line);
        println!("{}", name);
        println!("{}", line);
        println!("{:>12} = {}", "nodes", npoint);
        println!("{:>12} = {:.6e}", "h", h);
        println!("{:>12} = {:.6e}", "Δt", plan.dt);
        println!("{:>12} = {}", "Nt", plan.nt);
        println!("{:>12} = {:.6e}", "T_real", plan.t_real);
        println!("{:>12} = {:.4}", "α", plan.alpha);
        println!("{:>8} {:>13}", "timestep", "t");
    }

    /// Prints the progress of the time loop (every 10% of the time steps)
    #[inline]
    pub fn print_timestep(&self, timestep: usize, plan: &TimeStepPlan) {
        if !self.verbose {
            return;
        }
        let every = usize::max(plan.nt / 10, 1);
        if (timestep + 1) % every == 0 || timestep + 1 == plan.nt {
            let t = ((timestep + 1) as f64) * plan.dt;
            println!("{:>8} {:>13.6e}", timestep + 1, t);
        }
    }

    /// Prints the elapsed time
    #[inline]
    pub fn print_elapsed(&self, elapsed_ns: u128) {
        if !self.verbose {
            return;
        }
        println!("completed in {}\n", format_nanoseconds(elapsed_ns));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Control;

    #[test]
    fn new_works() {
        let control = Control::new();
        assert_eq!(control.t_fin, 1.0);
        assert_eq!(control.stability_factor, None);
        assert_eq!(control.n_front_interval, 50);
        assert_eq!(control.front_level, 0.5);
        assert_eq!(control.factor_or(0.2), 0.2);
        assert_eq!(control.validate(), None);
    }

    #[test]
    fn validate_captures_errors() {
        let mut control = Control::new();
        control.t_fin = 0.0;
        assert_eq!(
            control.validate(),
            Some("t_fin = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        control.t_fin = 1.0;
        control.stability_factor = Some(-0.1);
        assert_eq!(
            control.validate(),
            Some("stability_factor = -0.1 is incorrect; it must be > 0.0".to_string())
        );
        control.stability_factor = Some(0.1);
        assert_eq!(control.factor_or(0.2), 0.1);
        control.t_snapshots = vec![0.5, 0.2];
        assert_eq!(
            control.validate(),
            Some("t_snapshots[1] = 0.2 is incorrect; the times must be in ascending order".to_string())
        );
        control.t_snapshots = vec![-1.0];
        assert_eq!(
            control.validate(),
            Some("t_snapshots[0] = -1.0 is incorrect; it must be ≥ 0.0".to_string())
        );
    }
}
