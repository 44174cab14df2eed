use std::io::Write;

use rand::Rng;
use tracing::debug;
use tracing::instrument;
use tracing::trace;

use crate::generate::Assignment;
use crate::output::Output;
use crate::template::Template;

/// Walk `templates` once, filling in a random value for every flag we
/// recognize. When `trace` is given, the split of each template is written
/// to it as it is visited.
#[instrument(skip_all, fields(templates = templates.len()))]
pub fn randomize<S>(
    templates: &[S],
    rng: &mut impl Rng,
    mut trace: Option<&mut dyn Write>,
) -> std::io::Result<Output>
where
    S: AsRef<str>,
{
    let mut output = Output::new();
    for template in templates {
        let template = Template::parse(template.as_ref());
        if let Some(trace) = trace.as_mut() {
            writeln!(trace, "{}", template.fragments())?;
        }
        match Assignment::rand(template.name, rng) {
            Some(assignment) => {
                debug!(%assignment, "generated");
                output.push(&assignment);
            }
            None => trace!(name = template.name, "skipped"),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::template::TEMPLATES;

    fn run(seed: u64) -> Output {
        let mut rng = StdRng::seed_from_u64(seed);
        randomize(&TEMPLATES, &mut rng, None).unwrap()
    }

    #[test]
    fn fixed_templates_yield_three_assignments_in_order() {
        for seed in 0..20 {
            let output = run(seed);
            let entries = output.entries();
            assert_eq!(entries.len(), 4);
            assert_eq!(entries[0], "");
            assert!(entries[1].starts_with("--description=\""));
            assert!(entries[1].ends_with('"'));
            assert!(entries[1].len() > r#"--description="""#.len());
            assert!(entries[2] == "--enabled=True" || entries[2] == "--enabled=False");
            assert!(entries[3] == "--mode=interactive" || entries[3] == "--mode=non-interactive");
        }
    }

    #[test]
    fn unhandled_templates_never_appear() {
        let unhandled = [
            "--new-name",
            "--organization-token",
            "--team-token",
            "--user-token",
            "--config",
            "--log",
            "--log-file-path",
            "--organization",
            "--profile",
            "--verbosity",
        ];
        let output = run(3);
        for entry in output.assignments() {
            let (name, _) = entry.split_once('=').unwrap();
            assert!(!unhandled.contains(&name), "{entry}");
        }
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn trace_has_one_line_per_template() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut trace = Vec::new();
        randomize(&TEMPLATES, &mut rng, Some(&mut trace)).unwrap();
        let trace = String::from_utf8(trace).unwrap();
        let lines: Vec<_> = trace.lines().collect();
        assert_eq!(lines.len(), TEMPLATES.len());
        assert_eq!(lines[0], "['--description', 'string']");
        assert_eq!(lines[12], "['--verbosity', 'string']");
    }

    #[test]
    fn malformed_templates_are_skipped() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut trace = Vec::new();
        let templates = ["--oops", "--enabled=bool", "--mode"];
        let output = randomize(&templates, &mut rng, Some(&mut trace)).unwrap();
        assert_eq!(output.assignments().len(), 2);
        assert!(output.assignments()[0].starts_with("--enabled="));
        assert!(output.assignments()[1].starts_with("--mode="));
        let trace = String::from_utf8(trace).unwrap();
        assert!(trace.starts_with("['--oops']\n"));
    }

    #[test]
    fn empty_template_list_yields_placeholder_only() {
        let mut rng = StdRng::seed_from_u64(0);
        let output = randomize::<&str>(&[], &mut rng, None).unwrap();
        assert_eq!(output.entries(), [""]);
    }
}
