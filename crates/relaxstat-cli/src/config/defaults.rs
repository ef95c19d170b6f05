pub struct DefaultsConfig {
    pub log_file_name: String,
    pub model_prefix: String,
    pub model_suffix: String,
    pub excluded_dirs: Vec<String>,
    pub scan_top_n: usize,
    pub summary_file_name: String,
    pub compare_top_n: usize,
    pub rank_column: String,
    pub value_column: String,
    pub baseline_group: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            log_file_name: "relax_2.log".to_string(),
            model_prefix: "min_again".to_string(),
            model_suffix: "pdb".to_string(),
            excluded_dirs: vec!["input_lists".to_string()],
            scan_top_n: 20,
            summary_file_name: "summary.csv".to_string(),
            compare_top_n: 40,
            rank_column: "Score".to_string(),
            value_column: "IntE".to_string(),
            baseline_group: "relax_2leb_WT".to_string(),
        }
    }
}
