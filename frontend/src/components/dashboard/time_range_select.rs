use shared::TimeRange;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeRangeSelectProps {
    pub selected: TimeRange,
    pub on_change: Callback<TimeRange>,
}

#[function_component(TimeRangeSelect)]
pub fn time_range_select(props: &TimeRangeSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TimeRange>() {
                Ok(range) => on_change.emit(range),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    html! {
        <select class="time-range" onchange={on_change}>
            {for TimeRange::ALL.iter().map(|range| html! {
                <option value={range.as_query()} selected={*range == props.selected}>
                    {range.label()}
                </option>
            })}
        </select>
    }
}
