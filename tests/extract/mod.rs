mod tests_declarations;
mod tests_disqualified;
mod tests_qualified_names;
mod tests_visibility;
