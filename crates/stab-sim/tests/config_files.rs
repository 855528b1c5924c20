use std::fs;

use stab_circuit::{CodeFamily, MemoryBasis, NoiseSpec};
use stab_sim::commands::build::{self, BuildArgs};
use stab_sim::{load_build_config, load_sweep_config, run_sweep};

const SURFACE_YAML: &str = r#"
code:
  family: surface_code
  scale: [3, 5]
  memory: x_memory
noise:
  gate: 0.0015
  data: [0.001, 0.0, 0.002]
rounds: 4
"#;

#[test]
fn build_config_parses_from_yaml() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("build.yaml");
    fs::write(&path, SURFACE_YAML).unwrap();

    let config = load_build_config(&path).expect("parse config");
    assert_eq!(
        config.code,
        CodeFamily::SurfaceCode {
            scale: (3, 5),
            memory: MemoryBasis::XMemory
        }
    );
    assert_eq!(config.noise.gate, Some(NoiseSpec::Uniform(0.0015)));
    assert_eq!(config.noise.z_check, None);
    assert_eq!(config.rounds, 4);

    let model = config.builder().unwrap().build().unwrap();
    assert_eq!(model.circuit().num_detectors(), 3 * (4 + 1));
}

#[test]
fn hypergraph_codes_accept_token_lists() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("hp.yaml");
    fs::write(
        &path,
        "code:\n  family: hypergraph_product_code\n  clist1: [B, C, 0, 1, B]\n  clist2: [B, C, 0, 1, B]\n  pos:\n    0: [2.0, 2.0]\n    8: [0.0, 0.0]\nrounds: 1\n",
    )
    .unwrap();
    let config = load_build_config(&path).expect("parse config");
    let model = config.builder().unwrap().build().unwrap();
    assert!(!model.product().unwrap().crossings().is_empty());
}

#[test]
fn missing_and_malformed_files_are_reported() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let err = load_build_config(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code(), "config-read");

    let path = dir.path().join("bad.yaml");
    fs::write(&path, "code:\n  family: toric_code\nrounds: 1\n").unwrap();
    let err = load_build_config(&path).unwrap_err();
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn sweep_results_keep_job_order() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("sweep.yaml");
    let mut plan = String::from("parallelism: 3\njobs:\n");
    for distance in [5, 2, 7, 3, 4] {
        plan.push_str(&format!(
            "  - code: {{family: repetition_code, distance: {distance}}}\n    rounds: 2\n"
        ));
    }
    fs::write(&path, plan).unwrap();

    let config = load_sweep_config(&path).unwrap();
    let records = run_sweep(&config).unwrap();
    let qubits: Vec<usize> = records.iter().map(|record| record.qubits).collect();
    assert_eq!(qubits, vec![11, 5, 15, 7, 9]);
    let detectors: Vec<usize> = records.iter().map(|record| record.detectors).collect();
    assert_eq!(detectors, vec![15, 6, 21, 9, 12]);
    assert!(records.iter().enumerate().all(|(idx, record)| record.index == idx));

    let serial = run_sweep(&stab_sim::SweepConfig {
        parallelism: 1,
        ..config
    })
    .unwrap();
    assert_eq!(serial, records);
}

#[test]
fn failing_job_is_identified() {
    let config = stab_sim::SweepConfig {
        jobs: vec![stab_sim::BuildConfig {
            code: CodeFamily::SurfaceCode {
                scale: (4, 4),
                memory: MemoryBasis::ZMemory,
            },
            noise: Default::default(),
            rounds: 1,
        }],
        parallelism: 2,
    };
    let err = run_sweep(&config).unwrap_err();
    assert_eq!(err.code(), "even-scale");
    assert_eq!(err.info().context["job"], "0");
}

#[test]
fn build_command_writes_a_loadable_artifact() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let out = dir.path().join("rep.json");
    let args = BuildArgs {
        code: Some("repetition_code".into()),
        distance: Some(3),
        rounds: 2,
        out: Some(out.clone()),
        ..BuildArgs::default()
    };
    build::run(&args).expect("build succeeds");

    let artifact = stab_circuit::serde_io::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(artifact.roles, "QZQZQZQ");
    assert_eq!(artifact.circuit.num_detectors(), 9);
    assert_eq!(artifact.provenance.selector, "repetition_code");
}

#[test]
fn selector_flags_are_validated() {
    let args = BuildArgs {
        code: Some("surface_code:z_memory".into()),
        distance: Some(3),
        rounds: 1,
        ..BuildArgs::default()
    };
    let err = build::resolve(&args).unwrap_err();
    assert!(err.to_string().contains("unexpected-parameter"));
}

#[test]
fn random_factors_are_seeded() {
    use stab_sim::commands::pcm::{factors, PcmArgs};

    let args = PcmArgs {
        random: Some((6, 4, 3)),
        seed: 11,
        ..PcmArgs::default()
    };
    let (a1, a2) = factors(&args).unwrap();
    let (b1, b2) = factors(&args).unwrap();
    assert_eq!(a1, b1);
    assert_eq!(a2, b2);
    assert_eq!(a1.num_bits(), 6);
    assert_eq!(a1.num_checks(), 4);

    let dir = tempfile::tempdir().expect("tmp dir");
    let out = dir.path().join("product.json");
    stab_sim::commands::pcm::run(&PcmArgs {
        out: Some(out.clone()),
        ..args
    })
    .unwrap();
    let (product, provenance) =
        stab_pcm::serde_io::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert!(product.commutes());
    assert_eq!(provenance.selector, "hypergraph_product_code");
}
