//! Static prompt text sent to the model or returned to the client.

mod system;
pub mod templates;

pub use system::{WORK_DIR, system_prompt};

/// Instruction for the classification call. The model must answer with one word.
pub const CLASSIFIER_INSTRUCTION: &str = "Return either node or react based on what you think this project should be. Only return a single word: either \"node\" or \"react\". Do not return anything extra.";

/// Design guidance prepended to front-end (react) scaffolds only.
pub const BASE_PROMPT: &str = "For all designs I ask you to make, have them be beautiful, not cookie cutter. Make webpages that are fully featured and worthy for production.\n\nBy default, this template supports JSX syntax with Tailwind CSS classes, React hooks, and Lucide React for icons. Do not install other packages for UI themes, icons, etc unless absolutely necessary or I request them.\n\nUse icons from lucide-react for logos.\n\nUse stock photos from unsplash where appropriate, only valid URLs you know exist. Do not download the images, only link to them in image tags.\n\n";

/// Files present in every starter that the model never sees.
const HIDDEN_FILES: &[&str] = &[".gitignore", "package-lock.json"];

/// Wraps a starter artifact in the preamble telling the model it is looking at
/// the whole project, followed by the list of files it cannot see.
pub fn project_files_prompt(template: &str) -> String {
    let mut prompt = format!(
        "Here is an artifact that contains all files of the project visible to you.\nConsider the contents of ALL files in the project.\n\n{template}\n\nHere is a list of files that exist on the file system but are not being shown to you:\n\n"
    );
    for file in HIDDEN_FILES {
        prompt.push_str("  - ");
        prompt.push_str(file);
        prompt.push('\n');
    }
    prompt
}
