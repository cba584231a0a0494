use crate::cv::Cv;

/// Print the built-in sample CV as YAML so users can redirect it into a file
/// and edit from there.
pub fn run(quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("# cvdeck sample CV \u{2014} save as my-cv.yaml, edit, then run `cvdeck my-cv.yaml`");
    }
    let yaml = serde_yaml::to_string(&Cv::sample())?;
    print!("{yaml}");
    Ok(())
}
