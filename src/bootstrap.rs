use crate::listing::HANDLER_SUFFIX;

/// Name of the generated wrapper inside `src/`.
pub const BOOTSTRAP_FILENAME: &str = "lambda-runner.ts";

const LAMBDA_NAME_PLACEHOLDER: &str = "{LAMBDA_NAME}";

/// Wrapper that loads the event named by `process.argv[2]` (or `{}`) and
/// awaits the selected module's `handler` export with it.
pub const BOOTSTRAP_TEMPLATE: &str = r#"
import { Context } from 'aws-lambda'
import { handler } from './{LAMBDA_NAME}'
import { readFileSync } from 'fs'

const filenameEvent = process.argv.at(2)
function loadEvent(filename: string | undefined): unknown {
  if(!filename) {
    return {}
  }

  const file = readFileSync(filename, 'utf-8')
  return JSON.parse(file)
}

async function main() {
  const event = loadEvent(filenameEvent)
  // eslint-disable-next-line @typescript-eslint/no-explicit-any
  await handler(event as any, null as unknown as Context, () => {})
}

main().then(() => {
  // eslint-disable-next-line no-console
  console.log('done')
})
"#;

pub fn module_name(handler_file: &str) -> &str {
    handler_file
        .strip_suffix(HANDLER_SUFFIX)
        .unwrap_or(handler_file)
}

pub fn generate(handler_file: &str) -> String {
    BOOTSTRAP_TEMPLATE.replace(LAMBDA_NAME_PLACEHOLDER, module_name(handler_file))
}
