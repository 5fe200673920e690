mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::{contains, is_empty, starts_with};

    use std::fs;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "perfdash";

    const TIMING_REPORT: &str = "\
Design Timing Summary
---------------------
    WNS(ns): -0.123
    TNS(ns): -4.567
    Failing Endpoints: 12
    WHS(ns): 0.045
    THS(ns): 0.000
";

    const UTILIZATION_REPORT: &str = "\
+----------------+------+-------+-----------+-------+
| Site Type      | Used | Fixed | Available | Util% |
+----------------+------+-------+-----------+-------+
| CLB LUTs       | 1000 |     0 |      5000 | 20.0  |
| CLB Registers  | 4200 |     0 |      5000 | 84.0  |
| Block RAM Tile |   96 |     0 |       100 | 96.0  |
| DSPs           |    0 |     0 |       240 |  0.0  |
+----------------+------+-------+-----------+-------+
";

    const POWER_REPORT: &str = "\
+--------------------------+-------+
| Total On-Chip Power (W)  | 2.346 |
| Dynamic (W)              | 1.500 |
| Device Static (W)        | 0.846 |
+--------------------------+-------+
";

    fn write_reports(dir: &Path) -> std::io::Result<()> {
        fs::write(dir.join("post_route_timing_summary.rpt"), TIMING_REPORT)?;
        fs::write(dir.join("post_route_utilization.rpt"), UTILIZATION_REPORT)?;
        fs::write(dir.join("post_route_power.rpt"), POWER_REPORT)?;
        Ok(())
    }

    fn perfdash(reports: &Path, output: &Path) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config")
            .arg("--reports-dir")
            .arg(reports)
            .arg("--output-dir")
            .arg(output)
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_reports_dir_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert()
            .failure()
            .stderr(contains("--reports-dir <DIR>"));
        Ok(())
    }

    #[test]
    fn test_output__when_reports_dir_missing() -> TestResult {
        let output = tempfile::tempdir()?;
        let mut cmd = perfdash(Path::new("/no/such/reports"), output.path())?;

        cmd.assert()
            .failure()
            .code(1)
            .stderr(starts_with("Error: Reports directory not found"));
        Ok(())
    }

    #[test]
    fn test_output__when_reports_dir_is_a_file() -> TestResult {
        let output = tempfile::tempdir()?;
        let file = tempfile::NamedTempFile::new()?;
        let mut cmd = perfdash(file.path(), output.path())?;

        cmd.assert()
            .failure()
            .code(1)
            .stderr(starts_with("Error: Invalid argument"));
        Ok(())
    }

    #[test]
    fn test_output__empty_reports_dir() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        let out_dir = output.path().join("dash");
        let mut cmd = perfdash(reports.path(), &out_dir)?;

        cmd.assert()
            .success()
            .stdout(contains("Dashboard generated in:"))
            .stdout(contains("dashboard.html in your browser"));

        assert!(out_dir.join("dashboard.html").exists());
        assert!(!out_dir.join("timing_analysis.svg").exists());
        assert!(!out_dir.join("utilization.svg").exists());
        assert!(!out_dir.join("power_analysis.svg").exists());

        let html = fs::read_to_string(out_dir.join("dashboard.html"))?;
        assert!(html.contains("No timing reports found"));
        Ok(())
    }

    #[test]
    fn test_output__full_run_with_json_export() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        write_reports(reports.path())?;
        let json_path = output.path().join("exports/metrics.json");
        let mut cmd = perfdash(reports.path(), output.path())?;

        cmd.arg("--json-output").arg(&json_path);

        cmd.assert()
            .success()
            .stdout(contains("WNS: -0.123 ns"))
            .stdout(contains("BRAM: 96.0% (96 / 100)"))
            .stdout(contains("Total: 2.35 W"))
            .stdout(contains(format!(
                "Dashboard generated in: {}",
                output.path().display()
            )));

        for name in [
            "dashboard.html",
            "timing_analysis.svg",
            "utilization.svg",
            "power_analysis.svg",
        ] {
            assert!(output.path().join(name).exists(), "missing {name}");
        }

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
        let timing = &json["timing"]["post_route_timing_summary"];
        assert_eq!(timing["wns"], -0.123);
        assert_eq!(timing["tns"], -4.567);
        assert_eq!(timing["failing_endpoints"], 12);
        let lut = &json["utilization"]["post_route_utilization"]["lut"];
        assert_eq!(lut["used"], 1000);
        assert_eq!(lut["available"], 5000);
        assert_eq!(lut["utilization"], 20.0);
        assert_eq!(json["power"]["post_route_power"]["total_power"], 2.346);
        assert_eq!(json["power"]["post_route_power"]["confidence"], "Low");
        Ok(())
    }

    #[test]
    fn test_output__json_format_prints_result() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        write_reports(reports.path())?;
        let mut cmd = perfdash(reports.path(), output.path())?;

        cmd.arg("--format").arg("json");

        let assert = cmd.assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
        let json: serde_json::Value = serde_json::from_str(&stdout)?;
        assert_eq!(json["timing"]["post_route_timing_summary"]["whs"], 0.045);
        assert!(!stdout.contains("Dashboard generated in"));
        Ok(())
    }

    #[test]
    fn test_output__minimal_format() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        write_reports(reports.path())?;
        let mut cmd = perfdash(reports.path(), output.path())?;

        cmd.arg("--format").arg("minimal");

        cmd.assert()
            .success()
            .stdout(contains("timing post_route_timing_summary wns -0.123\n"))
            .stdout(contains("power post_route_power total_power 2.346\n"));
        Ok(())
    }

    #[test]
    fn test_output__quiet_prints_nothing() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        write_reports(reports.path())?;
        let mut cmd = perfdash(reports.path(), output.path())?;

        cmd.arg("--quiet");

        cmd.assert().success().stdout(is_empty());
        assert!(output.path().join("dashboard.html").exists());
        Ok(())
    }

    #[test]
    fn test_output__unparseable_value_fails() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        fs::write(reports.path().join("bad_timing.rpt"), "WNS(ns): 1.2.3\n")?;
        let mut cmd = perfdash(reports.path(), output.path())?;

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Error: Parse error: field 'wns' matched '1.2.3'"));
        Ok(())
    }

    #[test]
    fn test_output__non_recursive_by_default() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        let nested = reports.path().join("impl_1");
        fs::create_dir(&nested)?;
        fs::write(nested.join("nested_timing.rpt"), TIMING_REPORT)?;

        perfdash(reports.path(), output.path())?
            .assert()
            .success()
            .stdout(contains("no timing reports"));

        perfdash(reports.path(), output.path())?
            .arg("--recursive")
            .assert()
            .success()
            .stdout(contains("Timing (nested_timing, 1 report(s))"));
        Ok(())
    }

    #[test]
    fn test_output__duplicate_report_identifier_warns() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        for run in ["impl_1", "impl_2"] {
            let dir = reports.path().join(run);
            fs::create_dir(&dir)?;
            fs::write(dir.join("route_timing.rpt"), TIMING_REPORT)?;
        }

        perfdash(reports.path(), output.path())?
            .arg("--recursive")
            .assert()
            .success()
            .stderr(contains("Duplicate timing report identifier 'route_timing'"));
        Ok(())
    }

    #[test]
    fn test_output__broken_discovered_config_warns() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        let workdir = tempfile::tempdir()?;
        fs::write(
            workdir.path().join(".perfdash.toml"),
            "output_dir = [unclosed",
        )?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(workdir.path())
            .arg("--reports-dir")
            .arg(reports.path())
            .arg("--output-dir")
            .arg(output.path())
            .env("NO_COLOR", "1");

        cmd.assert()
            .success()
            .stderr(contains("Ignoring config file"))
            .stderr(contains("Invalid TOML in config file"));
        assert!(output.path().join("dashboard.html").exists());
        Ok(())
    }

    #[test]
    fn test_output__config_file_sets_format() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        write_reports(reports.path())?;
        let config = output.path().join("perfdash.toml");
        fs::write(&config, "output_format = \"minimal\"\n")?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--config")
            .arg(&config)
            .arg("--reports-dir")
            .arg(reports.path())
            .arg("--output-dir")
            .arg(output.path());

        cmd.assert()
            .success()
            .stdout(contains("timing post_route_timing_summary failing_endpoints 12"));
        Ok(())
    }

    #[test]
    fn test_output__invalid_config_file() -> TestResult {
        let reports = tempfile::tempdir()?;
        let output = tempfile::tempdir()?;
        let config = output.path().join("perfdash.toml");
        fs::write(&config, "output_format = \"yaml\"\n")?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--config")
            .arg(&config)
            .arg("--reports-dir")
            .arg(reports.path());

        cmd.assert()
            .failure()
            .stderr(contains("Invalid output format 'yaml'"));
        Ok(())
    }

    #[test]
    fn test_completion_generate__bash() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("completion-generate").arg("bash");

        cmd.assert()
            .success()
            .stdout(contains("perfdash"))
            .stdout(contains("--reports-dir"));
        Ok(())
    }
}
