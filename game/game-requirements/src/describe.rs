use crate::{
    error::{RequirementError, RequirementKind},
    lang::Lang,
    types::{Displayable, Producible, Requirable},
};

const REQS_KEY: &str = "Reqs";

fn separator(line_breaks: bool) -> &'static str {
    if line_breaks {
        "\n"
    } else {
        " "
    }
}

fn reqs_label(translated: bool, lang: &dyn Lang) -> String {
    lang.string(REQS_KEY, if translated { "" } else { "english" })
}

fn null_prerequisite<E: Displayable + ?Sized>(
    entity: &E,
    kind: RequirementKind,
    index: usize,
) -> RequirementError {
    log::warn!(
        target: "game-requirements",
        "{kind} requirement {index} of {} is not resolved",
        entity.raw_name()
    );
    RequirementError::NullPrerequisite {
        entity: entity.raw_name().to_string(),
        kind,
        index,
    }
}

/// Names of all unit and upgrade requirements, each one followed by the
/// separator.
fn req_names<E: Requirable + ?Sized>(
    entity: &E,
    translated: bool,
    lang: &dyn Lang,
) -> Result<Vec<String>, RequirementError> {
    let units = (0..entity.unit_req_count()).map(|i| {
        entity
            .unit_req(i)
            .map(|req| req.name(translated, lang))
            .ok_or_else(|| null_prerequisite(entity, RequirementKind::Unit, i))
    });
    let upgrades = (0..entity.upgrade_req_count()).map(|i| {
        entity
            .upgrade_req(i)
            .map(|req| req.name(translated, lang))
            .ok_or_else(|| null_prerequisite(entity, RequirementKind::Upgrade, i))
    });
    units.chain(upgrades).collect()
}

/// `"<name> <Reqs>:\n"` followed by one requirement per line, or only the name
/// if nothing is required.
pub fn req_desc<E: Requirable + ?Sized>(
    entity: &E,
    translated: bool,
    lang: &dyn Lang,
) -> Result<String, RequirementError> {
    let names = req_names(entity, translated, lang)?;
    let name = entity.name(translated, lang);
    if names.is_empty() {
        return Ok(name);
    }

    let mut res = format!("{name} {}:\n", reqs_label(translated, lang));
    for req in names {
        res.push_str(&req);
        res.push('\n');
    }
    Ok(res)
}

/// `"<resource>: <amount>"` for every non zero cost.
pub fn resource_req_desc<E: Producible + ?Sized>(
    entity: &E,
    line_breaks: bool,
    translated: bool,
    lang: &dyn Lang,
) -> Result<String, RequirementError> {
    let mut res = String::new();
    for i in 0..entity.cost_count() {
        let cost = entity
            .cost(i)
            .ok_or_else(|| null_prerequisite(entity, RequirementKind::Cost, i))?;
        if cost.amount == 0 {
            continue;
        }
        res.push_str(&format!(
            "{}: {}{}",
            cost.resource.name(translated, lang),
            cost.amount,
            separator(line_breaks)
        ));
    }
    Ok(res)
}

pub fn unit_and_upgrade_req_desc<E: Requirable + ?Sized>(
    entity: &E,
    line_breaks: bool,
    translated: bool,
    lang: &dyn Lang,
) -> Result<String, RequirementError> {
    let sep = separator(line_breaks);
    Ok(req_names(entity, translated, lang)?
        .into_iter()
        .map(|name| name + sep)
        .collect())
}

/// Full description of a producible. Unlike [`req_desc`] the header is always
/// present.
pub fn producible_req_desc<E: Producible + ?Sized>(
    entity: &E,
    ignore_resource_requirements: bool,
    translated: bool,
    lang: &dyn Lang,
) -> Result<String, RequirementError> {
    let mut res = format!(
        "{} {}:\n",
        entity.name(translated, lang),
        reqs_label(translated, lang)
    );
    if !ignore_resource_requirements {
        res.push_str(&resource_req_desc(entity, true, translated, lang)?);
    }
    res.push_str(&unit_and_upgrade_req_desc(entity, true, translated, lang)?);
    Ok(res)
}
