mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use noisegap::core::constants::fonts::REGULAR_CANDIDATES;
    use predicates::prelude::*;
    use predicates::str::{contains, starts_with};

    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "noisegap";

    fn noisegap(dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir).env_remove("FORCE_COLOR");
        Ok(cmd)
    }

    fn system_font_available() -> bool {
        REGULAR_CANDIDATES.iter().any(|p| Path::new(p).is_file())
    }

    #[test]
    fn test_output__summary_lines() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "--no-config"]);

        cmd.assert()
            .success()
            .stdout(starts_with("Required noise reduction by frequency band:\n"))
            .stdout(contains("63 Hz: 0.0 dB\n"))
            .stdout(contains("125 Hz: 0.0 dB\n"))
            .stdout(contains("1000 Hz: 9.8 dB\n"))
            .stdout(contains("4000 Hz: 21.5 dB\n"))
            .stdout(contains("8000 Hz: 24.3 dB\n"));
        Ok(())
    }

    #[test]
    fn test_output__table() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "--no-config"]);

        cmd.assert()
            .success()
            .stdout(contains("REQUIRED NOISE REDUCTION TABLE"))
            .stdout(contains(
                "Frequency, Hz | Calculated level | Permitted level | Required reduction",
            ))
            .stdout(contains(
                "   1000     |       69.8       |        60.0        |       9.8       ",
            ))
            .stdout(contains("Chart saved").not())
            .stdout(contains('\x1b').not());
        Ok(())
    }

    #[test]
    fn test_output__is_deterministic() -> TestResult {
        let dir = tempfile::tempdir()?;
        let first = noisegap(dir.path())?
            .args(["--no-charts", "--no-config"])
            .output()?;
        let second = noisegap(dir.path())?
            .args(["--no-charts", "--no-config"])
            .output()?;

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
        Ok(())
    }

    #[test]
    fn test_output__minimal_format() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "--no-config", "--format", "minimal"]);

        cmd.assert()
            .success()
            .stdout(contains("4000 Hz: 21.5 dB"))
            .stdout(contains("REQUIRED NOISE REDUCTION TABLE"));
        Ok(())
    }

    #[test]
    fn test_output__json_format() -> TestResult {
        let dir = tempfile::tempdir()?;
        let output = noisegap(dir.path())?
            .args(["--no-charts", "--no-config", "--format", "json"])
            .output()?;

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["scenario"], "variant 31");
        assert_eq!(value["exceeding_bands"], 6);
        assert_eq!(value["bands"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["bands"][4]["frequency_hz"], 1000);
        assert_eq!(value["charts"].as_array().map(Vec::len), Some(0));
        Ok(())
    }

    #[test]
    fn test_config__file_in_current_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".noisegap.toml"),
            "output_format = \"json\"\nrender_charts = false\n",
        )?;

        let output = noisegap(dir.path())?.output()?;

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value["exceeding_bands"], 6);
        Ok(())
    }

    #[test]
    fn test_config__cli_overrides_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".noisegap.toml"),
            "output_format = \"json\"\nrender_charts = false\n",
        )?;

        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--format", "minimal"]);

        cmd.assert()
            .success()
            .stdout(starts_with("Required noise reduction by frequency band:"));
        Ok(())
    }

    #[test]
    fn test_config__explicit_file_with_invalid_toml() -> TestResult {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("broken.toml");
        std::fs::write(&config, "dpi = \"lots\"\n")?;

        let mut cmd = noisegap(dir.path())?;
        cmd.arg("--config").arg(&config).arg("--no-charts");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(starts_with("Error: Configuration error: Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_config__discovered_file_with_invalid_values() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".noisegap.toml"),
            "dpi = 10\noutput_format = \"json\"\n",
        )?;

        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "-v"]);

        cmd.assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(contains("Error: Configuration error: DPI of 10 is out of range"));
        Ok(())
    }

    #[test]
    fn test_config__no_config_skips_invalid_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(".noisegap.toml"), "dpi = 10\n")?;

        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "--no-config"]);

        cmd.assert()
            .success()
            .stdout(starts_with("Required noise reduction by frequency band:"));
        Ok(())
    }

    #[test]
    fn test_error__dpi_out_of_range() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-charts", "--no-config", "--dpi", "72"]);

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Configuration error: DPI of 72 is out of range"))
            .stdout(predicate::str::is_empty());
        Ok(())
    }

    #[test]
    fn test_error__unknown_format() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-config", "--format", "xml"]);

        cmd.assert().failure().stderr(contains("invalid value 'xml'"));
        Ok(())
    }

    #[test]
    fn test_error__missing_font() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-config", "--no-progress", "--font", "/no/such/font.ttf"]);

        cmd.assert()
            .failure()
            .code(1)
            .stdout(contains("REQUIRED NOISE REDUCTION TABLE"))
            .stderr(contains("Error: Font error: font file '/no/such/font.ttf' does not exist"));
        Ok(())
    }

    #[test]
    fn test_charts__written_to_output_dir() -> TestResult {
        if !system_font_available() {
            return Ok(());
        }

        let dir = tempfile::tempdir()?;
        let out = dir.path().join("charts");
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["--no-config", "--no-progress", "-o"]).arg(&out);

        cmd.assert()
            .success()
            .stdout(contains("Chart saved:"))
            .stdout(contains("noise_reduction_analysis_variant31.png"))
            .stdout(contains("detailed_noise_comparison_variant31.png"));

        for name in [
            "noise_reduction_analysis_variant31.png",
            "detailed_noise_comparison_variant31.png",
        ] {
            let bytes = std::fs::read(out.join(name))?;
            assert!(bytes.starts_with(b"\x89PNG"));
        }
        Ok(())
    }

    #[test]
    fn test_completion__generate_bash() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.args(["completion-generate", "bash"]);

        cmd.assert()
            .success()
            .stdout(contains("_noisegap()"))
            .stdout(contains("--no-charts"));
        Ok(())
    }

    #[test]
    fn test_completion__requires_shell() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = noisegap(dir.path())?;
        cmd.arg("completion-generate");

        cmd.assert().failure();
        Ok(())
    }
}
