#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use gls::config::GLSConfig;
    use gls::io;
    use gls::opt::GLSOptimizer;
    use gls::opt::local_search;
    use mkp_rs::io::{export, export_assignment, import};
    use mkp_rs::util::assertions::problem_is_consistent;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/reference.json", 145.0, 145.0, &[-1, -1, -1, 0, 1, 0]; "reference")]
    #[test_case("../assets/trivial_fit.json", 10.0, 10.0, &[0]; "trivial fit")]
    #[test_case("../assets/no_fit.json", 0.0, 0.0, &[-1, -1]; "no fit")]
    #[test_case("../assets/greedy_miss.json", 9.0, 10.0, &[-1, 0]; "greedy miss")]
    #[test_case("../assets/split.json", 20.0, 20.0, &[0, 1, 2, 3]; "split")]
    #[test_case("../assets/chain.json", 5.0, 7.0, &[-1, 0, 0, -1, -1]; "chain")]
    fn test_instance(instance_path: &str, greedy_value: f64, final_value: f64, assignment: &[i64]) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import(&ext_instance).unwrap();

        let mut optimizer = GLSOptimizer::new(instance, GLSConfig::default());
        let solution = optimizer.solve();
        let greedy_solution = optimizer.greedy_solution.clone().unwrap();

        assert_eq!(greedy_solution.total_value, greedy_value);
        assert_eq!(solution.total_value, final_value);
        assert!(solution.total_value >= greedy_solution.total_value);
        assert_eq!(export_assignment(&solution.assignment), assignment);
        assert!(problem_is_consistent(&optimizer.problem));

        // a second run starts from scratch and produces the same solution
        let rerun = optimizer.solve();
        assert_eq!(rerun.assignment, solution.assignment);

        // refining a local optimum changes nothing
        let report = local_search::refine(&mut optimizer.problem, true);
        assert_eq!(report.n_swaps, 0);
        assert_eq!(optimizer.problem.assignment(), solution.assignment.as_slice());
    }

    #[test]
    fn greedy_only() {
        init_logger();
        let ext_instance = io::read_instance(Path::new("../assets/greedy_miss.json")).unwrap();
        let instance = import(&ext_instance).unwrap();
        let config = GLSConfig {
            local_search: false,
            ..GLSConfig::default()
        };

        let mut optimizer = GLSOptimizer::new(instance, config);
        let solution = optimizer.solve();

        assert_eq!(solution.total_value, 9.0);
        assert_eq!(export_assignment(&solution.assignment), &[0, -1]);
    }

    #[test]
    fn solution_can_be_restored() {
        let ext_instance = io::read_instance(Path::new("../assets/chain.json")).unwrap();
        let instance = import(&ext_instance).unwrap();

        let mut optimizer = GLSOptimizer::new(instance, GLSConfig::default());
        let solution = optimizer.solve();
        let greedy_solution = optimizer.greedy_solution.clone().unwrap();

        optimizer.problem.restore(&greedy_solution);
        assert_eq!(optimizer.problem.total_value(), 5.0);
        assert_eq!(optimizer.problem.residual_capacities(), &[2.0]);

        optimizer.problem.restore(&solution);
        assert_eq!(optimizer.problem.total_value(), 7.0);
        assert_eq!(optimizer.problem.residual_capacities(), &[0.0]);
    }

    #[test]
    fn exported_solution_matches() {
        let ext_instance = io::read_instance(Path::new("../assets/reference.json")).unwrap();
        let instance = import(&ext_instance).unwrap();
        let mut optimizer = GLSOptimizer::new(instance, GLSConfig::default());
        let solution = optimizer.solve();

        let ext_solution = export(&optimizer.instance, &solution, *gls::EPOCH);
        assert_eq!(ext_solution.n_placed_items, 3);
        assert!(approx_eq!(f64, ext_solution.total_value, 145.0));
        assert_eq!(ext_solution.residual_capacities, vec![4.0, 9.0]);
        assert_eq!(ext_solution.assignment, vec![-1, -1, -1, 0, 1, 0]);

        let json = serde_json::to_value(&ext_solution).unwrap();
        assert_eq!(json["assignment"][3], 0);
        assert_eq!(json["assignment"][0], -1);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = io::read_config(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(format!("{err}").contains("could not open config file"));
        assert!(format!("{err:#}").contains("does_not_exist.json"));
    }

    #[test]
    fn malformed_config_file_is_reported() {
        // an instance file is not a config
        let err = io::read_config(Path::new("../assets/chain.json")).unwrap_err();
        assert!(format!("{err}").contains("incorrect config file format"));
    }

    #[test]
    fn config_defaults_when_fields_missing() {
        let config: GLSConfig =
            serde_json::from_str(r#"{"local_search": true, "verify_swaps": false}"#).unwrap();
        assert_eq!(config.max_passes, None);
        assert!(!config.verify_swaps);
    }
}
