use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A record the table can key and search.
pub trait TableRow: Clone + PartialEq + 'static {
    fn key(&self) -> String;
    fn matches(&self, term: &str) -> bool;
}

/// Rows matching `term`, in their original order.
pub fn filter_rows<'a, T: TableRow>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    rows.iter().filter(|row| row.matches(term)).collect()
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: TableRow> {
    pub headers: Vec<AttrValue>,
    pub rows: Vec<T>,
    /// One cell per header.
    pub render_row: Callback<T, Vec<Html>>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table<T: TableRow>(props: &DataTableProps<T>) -> Html {
    let search = use_state(String::new);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let visible = filter_rows(&props.rows, &search);
    let columns = props.headers.len();

    html! {
        <div class="space-y-4">
            <div class="relative flex-1 max-w-md">
                <input
                    type="text"
                    placeholder={props.placeholder.clone()}
                    value={(*search).clone()}
                    {oninput}
                    class="w-full px-4 py-2.5 bg-[#1a2235]/50 border border-orange-500/20 rounded-xl text-white placeholder:text-gray-500 focus:outline-none focus:border-orange-500/50 transition"
                />
            </div>
            <div class="relative overflow-x-auto bg-[#1a2235]/50 shadow-xl rounded-2xl border border-orange-500/10">
                <table class="w-full text-sm text-left">
                    <thead class="text-sm text-gray-300 bg-[#141b2d]/80 border-b border-orange-500/20">
                        <tr>
                            { for props.headers.iter().map(|header| html! {
                                <th scope="col" class="px-6 py-4 font-semibold tracking-wide">{ header }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        if visible.is_empty() {
                            <tr>
                                <td colspan={columns.to_string()} class="px-6 py-12 text-center text-gray-400">{"No data found"}</td>
                            </tr>
                        } else {
                            { for visible.iter().map(|row| html! {
                                <tr key={row.key()} class="bg-[#1a2235]/30 border-b border-orange-500/5 hover:bg-[#1a2235]/60">
                                    { for props.render_row.emit((*row).clone()).into_iter().map(|cell| html! {
                                        <td class="px-6 py-4 text-gray-200">{ cell }</td>
                                    }) }
                                </tr>
                            }) }
                        }
                    </tbody>
                </table>
            </div>
            <p class="text-sm text-gray-400">{ format!("Showing {} entries", visible.len()) }</p>
        </div>
    }
}
