//! The generated setter surface of [`Figure`](super::Figure).
//!
//! Layout rows write into the figure's layout map, axis rows into the x or y axis map. Values are
//! stored as given; nothing is validated until the figure is rendered.

figure_options! {
    layout {
        title_specs: specs => "title";
        /// Sets the title font.
        title_font_specs: specs => "title_font";
        title_font_color: text => "title_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        title_font_family: text => "title_font_family";
        title_font_size: int => "title_font_size";
        /// Sets the padding of the title.
        title_padding_specs: specs => "title_pad";
        /// The amount of padding (in px) along the bottom of the component.
        title_padding_bottom: int => "title_pad_b";
        /// The amount of padding (in px) on the left side of the component.
        title_padding_left: int => "title_pad_l";
        /// The amount of padding (in px) on the right side of the component.
        title_padding_right: int => "title_pad_r";
        /// The amount of padding (in px) along the top of the component.
        title_padding_top: int => "title_pad_t";
        /// Sets the plot's title.
        title_text | title: text => "title_text";
        /// Sets the x position with respect to xref in normalized coordinates from "0" (left) to
        /// "1" (right).
        title_x: real => "title_x";
        /// Sets the title's horizontal alignment with respect to its x position.
        title_xanchor: text => "title_xanchor";
        /// Sets the container x refers to.
        title_xref: text => "title_xref";
        /// Sets the y position with respect to yref in normalized coordinates from "0" (bottom) to
        /// "1" (top).
        title_y: real => "title_y";
        /// Sets the title's vertical alignment with respect to its y position.
        title_yanchor: text => "title_yanchor";
        /// Sets the container y refers to.
        title_yref: text => "title_yref";

        /// Determines whether or not a legend is drawn.
        legend_show: flag => "showlegend";
        legend_specs: specs => "legend";
        /// Sets the legend background color.
        legend_background_color: text => "legend_bgcolor";
        /// Sets the color of the border enclosing the legend.
        legend_border_color: text => "legend_bordercolor";
        /// Sets the width (in px) of the border enclosing the legend.
        legend_border_width: int => "legend_borderwidth";
        /// Sets the font used to text the legend items.
        legend_font_specs: specs => "legend_font";
        legend_font_color: text => "legend_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        legend_font_family: text => "legend_font_family";
        legend_font_size: int => "legend_font_size";
        /// Determines the behavior on legend group item click.
        legend_group_click: text => "legend_groupclick";
        /// Sets the font for group titles in legend.
        legend_group_title_font_specs: specs => "legend_grouptitlefont";
        legend_group_title_font_color: text => "legend_grouptitlefont_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        legend_group_title_font_family: text => "legend_grouptitlefont_family";
        legend_group_title_font_size: int => "legend_grouptitlefont_size";
        /// Determines the behavior on legend item click.
        legend_item_click: text => "legend_itemclick";
        /// Determines the behavior on legend item double-click.
        legend_item_double_click: text => "legend_itemdoubleclick";
        /// Determines if the legend items symbols scale with their corresponding "trace" attributes
        /// or remain "constant" independent of the symbol size on the graph.
        legend_item_sizing: text => "legend_itemsizing";
        /// Sets the width (in px) of the legend item symbols (the part other than the title.text).
        legend_item_width: int => "legend_itemwidth";
        /// Sets the orientation of the legend.
        legend_orientation: text => "legend_orientation";
        legend_title_specs: specs => "legend_title";
        /// Sets this legend's title font.
        legend_title_font_specs: specs => "legend_title_font";
        legend_title_font_color: text => "legend_title_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        legend_title_font_family: text => "legend_title_font_family";
        legend_title_font_size: int => "legend_title_font_size";
        /// Determines the location of legend's title with respect to the legend items.
        legend_title_side: text => "legend_title_side";
        /// Sets the title of the legend.
        legend_title_text | legend_title: text => "legend_title_text";
        /// Sets the amount of vertical space (in px) between legend groups.
        legend_trace_group_gap: int => "legend_tracegroupgap";
        /// Determines the order at which the legend items are displayed.
        legend_trace_order: text => "legend_traceorder";
        /// Controls persistence of legend-driven changes in trace and pie label visibility.
        legend_uirevision: any => "legend_uirevision";
        /// Sets the vertical alignment of the symbols with respect to their associated text.
        legend_valign: text => "legend_valign";
        /// Sets the x position (in normalized coordinates) of the legend.
        legend_x: real => "legend_x";
        /// Sets the legend's horizontal position anchor.
        legend_xanchor: text => "legend_xanchor";
        /// Sets the y position (in normalized coordinates) of the legend.
        legend_y: real => "legend_y";
        /// Sets the legend's vertical position anchor This anchor binds the y position to the
        /// "top", "middle" or "bottom" of the legend.
        legend_yanchor: text => "legend_yanchor";

        margin_specs: specs => "margin";
        /// Turns on/off margin expansion computations.
        margin_auto_expand: flag => "margin_autoexpand";
        /// Sets the bottom margin (in px).
        margin_bottom: int => "margin_b";
        /// Sets the left margin (in px).
        margin_left: int => "margin_l";
        /// Sets the amount of padding (in px) between the plotting area and the axis lines
        /// (default: 0)
        margin_padding: int => "margin_pad";
        /// Sets the right margin (in px).
        margin_right: int => "margin_r";
        /// Sets the top margin (in px).
        margin_top: int => "margin_t";

        /// Determines whether or not a layout width or height that has been left undefined by the
        /// user is initialized on each relayout.
        autosize: flag => "autosize";

        /// Sets the plot's width (in px).
        width: int => "width";

        /// Sets the plot's height (in px).
        height: int => "height";

        /// Sets the global font.
        font_specs: specs => "font";
        font_color: text => "font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        font_family: text => "font_family";
        font_size: int => "font_size";

        uniform_text_specs: specs => "uniformtext";
        /// Sets the minimum text size between traces of the same type.
        uniform_text_min_size: int => "uniformtext_minsize";
        /// Determines how the font size for various text elements are uniformed between each trace
        /// type.
        uniform_text_mode: text => "uniformtext_mode";

        /// Sets the decimal and thousand separators.
        separators: text => "separators";

        /// Sets the background color of the paper where the graph is drawn.
        paper_background_color: text => "paper_bgcolor";

        /// Sets the background color of the plotting area in-between x and y axes.
        plot_background_color: text => "plot_bgcolor";

        /// Using "strict" a numeric string in trace data is not converted to a number.
        auto_type_numbers: text => "autotypenumbers";

        color_scale_specs: specs => "colorscale";
        /// Sets the default diverging colorscale.
        color_scale_diverging: text => "colorscale_diverging";
        /// Sets the default sequential colorscale for positive values.
        color_scale_sequential: text => "colorscale_sequential";
        /// Sets the default sequential colorscale for negative values.
        color_scale_sequential_minus: text => "colorscale_sequentialminus";

        /// Sets the default trace colors.
        colorway: list => "colorway";

        modebar_specs: specs => "modebar";
        /// Sets the color of the active or hovered on icons in the modebar.
        modebar_active_color: text => "modebar_activecolor";
        /// Determines which predefined modebar buttons to add.
        modebar_add: any => "modebar_add";
        /// Sets the background color of the modebar.
        modebar_background_color: text => "modebar_bgcolor";
        /// Sets the color of the icons in the modebar.
        modebar_color: text => "modebar_color";
        /// Sets the orientation of the modebar.
        modebar_orientation: text => "modebar_orientation";
        /// Determines which predefined modebar buttons to remove.
        modebar_remove: any => "modebar_remove";
        /// Controls persistence of user-driven changes related to the modebar, including hovermode,
        /// dragmode, and showspikes at both the root level and inside subplots.
        modebar_uirevision: any => "modebar_uirevision";

        /// Determines the mode of hover interactions.
        hover_mode: text => "hovermode";

        /// Examples: "event", "select", "event+select", "none"
        click_mode: text => "clickmode";

        /// Determines the mode of drag interactions.
        drag_mode: text => "dragmode";

        /// When dragmode is set to "select", this limits the selection of the drag to horizontal,
        /// vertical or diagonal.
        select_direction: text => "selectdirection";

        active_selection_specs: specs => "activeselection";
        /// Sets the color filling the active selection' interior.
        active_selection_fill_color: text => "activeselection_fillcolor";
        /// Sets the opacity of the active selection.
        active_selection_opacity: real => "activeselection_opacity";

        new_selection_specs: specs => "newselection";
        new_selection_line_specs: specs => "newselection_line";
        /// Sets the line color.
        new_selection_line_color: text => "newselection_line_color";
        /// Sets the dash style of lines.
        new_selection_line_dash: text => "newselection_line_dash";
        /// Sets the line width (in px).
        new_selection_line_width: int => "newselection_line_width";
        /// Describes how a new selection is created.
        new_selection_mode: text => "newselection_mode";

        /// Sets the default distance (in pixels) to look for data to add hover labels (-1 means no
        /// cutoff, 0 means no looking for data).
        hover_distance: int => "hoverdistance";

        /// Sets the default distance (in pixels) to look for data to draw spikelines to (-1 means
        /// no cutoff, 0 means no looking for data).
        spike_distance: int => "spikedistance";

        hover_label_specs: specs => "hoverlabel";
        /// Sets the horizontal alignment of the text content within hover label box.
        hover_label_align: text => "hoverlabel_align";
        /// Sets the background color of all hover labels on graph
        hover_label_background_color: text => "hoverlabel_bgcolor";
        /// Sets the border color of all hover labels on graph.
        hover_label_border_color: text => "hoverlabel_bordercolor";
        /// Sets the default hover label font used by all traces on the graph.
        hover_label_font_specs: specs => "hoverlabel_font";
        hover_label_font_color: text => "hoverlabel_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        hover_label_font_family: text => "hoverlabel_font_family";
        /// grouptitlefont (default: 13)
        hover_label_font_size: int => "hoverlabel_font_size";
        /// Sets the font for group titles in hover (unified modes).
        hover_label_group_title_font_specs: specs => "hoverlabel_grouptitlefont";
        hover_label_group_title_font_color: text => "hoverlabel_grouptitlefont_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        hover_label_group_title_font_family: text => "hoverlabel_grouptitlefont_family";
        hover_label_group_title_font_size: int => "hoverlabel_grouptitlefont_size";
        /// Sets the default length (in number of characters) of the trace name in the hover labels
        /// for all traces.
        hover_label_name_length: int => "hoverlabel_namelength";

        /// Sets transition options used during Plotly.react updates.
        transition_specs: specs => "transition";
        /// The duration of the transition, in milliseconds.
        transition_duration: int => "transition_duration";
        /// The easing function used for the transition (Default: "cubic-in-dut")
        transition_easing: text => "transition_easing";
        /// Determines whether the figure's layout or traces smoothly transitions during updates
        /// that make both traces and layout change.
        transition_ordering: text => "transition_ordering";

        /// If provided, a changed value tells Plotly.react that one or more data arrays has
        /// changed.
        data_revision: any => "datarevision";

        /// Used to allow user interactions with the plot to persist after Plotly.react calls that
        /// are unaware of these interactions.
        ui_revision: any => "uirevision";

        /// Controls persistence of user-driven changes in editable: True configuration, other than
        /// trace names and axis titles.
        edit_revision: any => "editrevision";

        /// Controls persistence of user-driven changes in selected points from all traces.
        selection_revision: any => "selectionrevision";

        /// Default attributes to be applied to the plot.
        template_specs: specs => "template";

        /// Assigns extra meta information that can be used in various text attributes.
        meta: any => "meta";

        /// Placeholder for exporting automargin-impacting values namely margin.t, margin.b,
        /// margin.l and margin.r in "full-json" mode.
        computed: any => "computed";

        grid_specs: specs => "grid";
        /// The number of columns in the grid.
        grid_columns: int => "grid_columns";
        grid_domain_specs: specs => "grid_domain";
        /// Sets the horizontal domain of this grid subplot (in plot fraction).
        grid_domain_x: list => "grid_domain_x";
        /// Sets the vertical domain of this grid subplot (in plot fraction).
        grid_domain_y: list => "grid_domain_y";
        /// If no subplots, xaxes, or yaxes are given but we do have rows and columns, we can
        /// generate defaults using consecutive axis IDs, in two ways: "coupled" gives one x axis
        /// per column and one y axis per row.
        grid_pattern: text => "grid_pattern";
        /// Is the first row the top or the bottom? Note that columns are always enumerated from
        /// left to right.
        grid_row_order: text => "grid_roworder";
        /// The number of rows in the grid.
        grid_rows: int => "grid_rows";
        /// Used for freeform grids, where some axes may be shared across subplots but others are
        /// not.
        grid_subplots: list => "grid_subplots";
        /// Used with yaxes when the x and y axes are shared across columns and rows.
        grid_xaxes: list => "grid_xaxes";
        /// Horizontal space between grid cells, expressed as a fraction of the total width
        /// available to one cell.
        grid_xgap: real => "grid_xgap";
        /// Sets where the x axis labels and titles go.
        grid_xside: text => "grid_xside";
        /// Used with yaxes when the x and y axes are shared across columns and rows.
        grid_yaxes: list => "grid_yaxes";
        /// Vertical space between grid cells, expressed as a fraction of the total height available
        /// to one cell.
        grid_ygap: real => "grid_ygap";
        /// Sets where the y axis labels and titles go.
        grid_yside: text => "grid_yside";

        /// Sets the default calendar system to use for interpreting and displaying dates throughout
        /// the plot.
        calendar: text => "calendar";

        new_shape_specs: specs => "newshape";
        /// When dragmode is set to "drawrect", "drawline" or "drawcircle" this limits the drag to
        /// be horizontal, vertical or diagonal.
        new_shape_draw_direction: text => "newshape_drawdirection";
        /// Sets the color filling new shapes' interior.
        new_shape_fill_color: text => "newshape_fillcolor";
        /// Determines the path's interior.
        new_shape_fill_rule: text => "newshape_fillrule";
        /// Specifies whether new shapes are drawn below or above traces.
        new_shape_layer: text => "newshape_layer";
        new_shape_line_specs: specs => "newshape_line";
        /// Sets the line color.
        new_shape_line_color: text => "newshape_line_color";
        /// Sets the dash style of lines.
        new_shape_line_dash: text => "newshape_line_dash";
        /// Sets the line width (in px).
        new_shape_line_width: int => "newshape_line_width";
        /// Sets the opacity of new shapes.
        new_shape_opacity: real => "newshape_opacity";

        active_shape_specs: specs => "activeshape";
        /// Sets the color filling the active shape' interior.
        active_shape_fill_color: text => "activeshape_fillcolor";
        /// Sets the opacity of the active shape.
        active_shape_opacity: real => "activeshape_opacity";

        selections: list => "selections";
        selections_line_specs: specs => "selections_line";
        /// Sets the line color.
        selections_line_color: text => "selections_line_color";
        /// Sets the dash style of lines.
        selections_line_dash: text => "selections_line_dash";
        /// Sets the line width (in px).
        selections_line_width: int => "selections_line_width";
        /// When used in a template, named items are created in the output figure in addition to any
        /// items the figure already has in this array.
        selections_name: text => "selections_name";
        /// Sets the opacity of the selection.
        selections_opacity: real => "selections_opacity";
        /// For type "path" - a valid SVG path similar to shapes.path in data coordinates.
        selections_path: text => "selections_path";
        /// Used to refer to a named item in this array in the template.
        selections_template_item_name: text => "selections_templateitemname";
        /// Specifies the selection type to be drawn.
        selections_type: text => "selections_type";
        /// Sets the selection's starting x position.
        selections_x0: any => "selections_x0";
        /// Sets the selection's end x position.
        selections_x1: any => "selections_x1";
        /// Sets the selection's x coordinate axis.
        selections_xref: text => "selections_xref";
        /// Sets the selection's starting y position.
        selections_y0: any => "selections_y0";
        /// Sets the selection's end y position.
        selections_y1: any => "selections_y1";
        /// Sets the selection's x coordinate axis.
        selections_yref: text => "selections_yref";

        /// Determines whether or not a text link citing the data source is placed at the bottom-
        /// right cored of the figure.
        hide_sources: flag => "hidesources";

        /// If True, the pie slice colors (whether given by piecolorway or inherited from colorway)
        /// will be extended to three times its original length by first repeating every color 20%
        /// lighter then each color 20% darker.
        pie_extend_colors: flag => "extendpiecolors";

        /// hiddenlabels is the funnelarea & pie chart analog of visible:'legendonly' but it can
        /// contain many labels, and can simultaneously hide slices from several pies/funnelarea
        /// charts
        hidden_labels: list => "hiddenlabels";

        /// Sets the default pie slice colors.
        pie_colorway: list => "piecolorway";

        /// Sets the gap (in plot fraction) between boxes of adjacent location coordinates.
        box_gap: real => "boxgap";
        /// Sets the gap (in plot fraction) between boxes of the same location coordinate.
        box_group_gap: real => "boxgroupgap";
        /// Determines how boxes at the same location coordinate are displayed on the graph.
        box_mode: text => "boxmode";

        /// Sets the gap (in plot fraction) between violins of adjacent location coordinates.
        violin_gap: real => "violingap";
        /// Sets the gap (in plot fraction) between violins of the same location coordinate.
        violin_group_gap: real => "violingroupgap";
        /// Determines how violins at the same location coordinate are displayed on the graph.
        violin_mode: text => "violinmode";

        /// Sets the gap (in plot fraction) between bars of the same location coordinate.
        bar_group_gap: real => "bargroupgap";
        /// Determines how bars at the same location coordinate are displayed on the graph.
        bar_mode: text => "barmode";
        /// Sets the normalization for bar traces on the graph.
        bar_norm: text => "barnorm";
        /// Sets the gap between bars of adjacent location coordinates.
        bar_gap: real => "bargap";

        /// Sets the gap (in plot fraction) between bars of adjacent location coordinates.
        waterfall_gap: real => "waterfallgap";
        /// Sets the gap (in plot fraction) between bars of the same location coordinate.
        waterfall_group_gap: real => "waterfallgroupgap";
        /// Determines how bars at the same location coordinate are displayed on the graph.
        waterfall_mode: text => "waterfallmode";

        /// Sets the gap (in plot fraction) between bars of adjacent location coordinates.
        funnel_gap: real => "funnelgap";
        /// Sets the gap (in plot fraction) between bars of the same location coordinate.
        funnel_group_gap: real => "funnelgroupgap";
        /// Determines how bars at the same location coordinate are displayed on the graph.
        funnel_mode: text => "funnelmode";
        /// If True, the funnelarea slice colors (whether given by funnelareacolorway or inherited
        /// from colorway) will be extended to three times its original length by first repeating
        /// every color 20% lighter then each color 20% darker.
        funnel_area_extend_colors: flag => "extendfunnelareacolors";
        /// Sets the default funnelarea slice colors.
        funnel_area_colorway: list => "funnelareacolorway";

        /// If True, the sunburst slice colors (whether given by sunburstcolorway or inherited from
        /// colorway) will be extended to three times its original length by first repeating every
        /// color 20% lighter then each color 20% darker.
        sunburst_extend_colors: flag => "extendsunburstcolors";
        /// Sets the default sunburst slice colors.
        sunburst_colorway: list => "sunburstcolorway";

        /// If True, the treemap slice colors (whether given by treemapcolorway or inherited from
        /// colorway) will be extended to three times its original length by first repeating every
        /// color 20% lighter then each color 20% darker.
        treemap_extend_colors: flag => "extendtreemapcolors";
        /// Sets the default treemap slice colors.
        treemap_colorway: list => "treemapcolorway";

        /// If True, the icicle slice colors (whether given by iciclecolorway or inherited from
        /// colorway) will be extended to three times its original length by first repeating every
        /// color 20% lighter then each color 20% darker.
        icicle_extend_colors: flag => "extendiciclecolors";
        /// Sets the default icicle slice colors.
        icicle_colorway: list => "iciclecolorway";
    }

    axes {
        /// If set to an opposite-letter axis id (e.g.
        [xaxis_anchor, yaxis_anchor]: text => "anchor";

        /// Determines whether long tick labels automatically grow the figure margins.
        [xaxis_auto_margin, yaxis_auto_margin]: any => "automargin";
        /// Determines whether or not the range of this axis is computed in relation to the input
        /// data.
        [xaxis_auto_range, yaxis_auto_range]: any => "autorange";
        /// Using "strict" a numeric string in trace data is not converted to a number.
        [xaxis_auto_type_numbers, yaxis_auto_type_numbers]: text => "autotypenumbers";

        /// Sets the calendar system to use for range and tick0 if this is a date axis.
        [xaxis_calendar, yaxis_calendar]: text => "calendar";

        /// Sets the order in which categories on this axis appear.
        [xaxis_category_array, yaxis_category_array]: list => "categoryarray";
        /// Specifies the ordering logic for the case of categorical variables.
        [xaxis_category_order, yaxis_category_order]: text => "categoryorder";

        /// Sets default for all colors associated with this axis all at once: line, font, tick, and
        /// grid colors.
        [xaxis_color, yaxis_color]: text => "color";

        /// If this axis needs to be compressed (either due to its own scaleanchor and scaleratio or
        /// those of the other axis), determines how that happens: by increasing the "range", or by
        /// decreasing the "domain".
        [xaxis_constrain, yaxis_constrain]: text => "constrain";
        /// If this axis needs to be compressed (either due to its own scaleanchor and scaleratio or
        /// those of the other axis), determines which direction we push the originally specified
        /// plot area.
        [xaxis_constrain_toward, yaxis_constrain_toward]: text => "constraintoward";

        /// Sets the color of the dividers Only has an effect on "multicategory" axes.
        [xaxis_divider_color, yaxis_divider_color]: text => "dividercolor";
        /// Sets the width (in px) of the dividers Only has an effect on "multicategory" axes.
        [xaxis_divider_width, yaxis_divider_width]: int => "dividerwidth";

        /// Sets the domain of this axis (in plot fraction).
        [xaxis_domain, yaxis_domain]: list => "domain";

        /// Sets the step in-between ticks on this axis.
        [xaxis_dtick, yaxis_dtick]: any => "dtick";

        /// Determines a formatting rule for the tick exponents.
        [xaxis_exponent_format, yaxis_exponent_format]: text => "exponentformat";

        /// Determines whether or not this axis is zoom-able.
        [xaxis_fixed_range, yaxis_fixed_range]: flag => "fixedrange";

        /// Sets the color of the grid lines.
        [xaxis_grid_color, yaxis_grid_color]: text => "gridcolor";
        /// Sets the dash style of lines.
        [xaxis_grid_dash, yaxis_grid_dash]: text => "griddash";
        /// Sets the width (in px) of the grid lines.
        [xaxis_grid_width, yaxis_grid_width]: int => "gridwidth";

        /// Sets the hover text formatting rule using d3 formatting mini-languages which are very
        /// similar to those in Python.
        [xaxis_hover_format, yaxis_hover_format]: text => "hoverformat";

        /// Sets the layer on which this axis is displayed.
        [xaxis_layer, yaxis_layer]: text => "layer";

        /// Sets the axis line color.
        [xaxis_line_color, yaxis_line_color]: text => "linecolor";
        /// Sets the width (in px) of the axis line.
        [xaxis_line_width, yaxis_line_width]: int => "linewidth";

        /// If set to another axis id (e.g.
        [xaxis_matches, yaxis_matches]: text => "matches";

        /// Hide SI prefix for 10^n if |n| is below this number.
        [xaxis_min_exponent, yaxis_min_exponent]: int => "minexponent";

        [xaxis_minor_specs, yaxis_minor_specs]: specs => "minor";
        /// Sets the step in-between ticks on this axis.
        [xaxis_minor_dtick, yaxis_minor_dtick]: any => "minor_dtick";
        /// Sets the color of the grid lines.
        [xaxis_minor_grid_color, yaxis_minor_grid_color]: text => "minor_gridcolor";
        /// Sets the dash style of lines.
        [xaxis_minor_grid_dash, yaxis_minor_grid_dash]: text => "minor_griddash";
        /// Sets the width (in px) of the grid lines.
        [xaxis_minor_grid_width, yaxis_minor_grid_width]: int => "minor_gridwidth";
        /// Specifies the maximum number of ticks for the particular axis.
        [xaxis_minor_nticks, yaxis_minor_nticks]: int => "minor_nticks";
        /// Determines whether or not grid lines are drawn.
        [xaxis_minor_show_grid, yaxis_minor_show_grid]: flag => "minor_showgrid";
        /// Sets the placement of the first tick on this axis.
        [xaxis_minor_tick0, yaxis_minor_tick0]: any => "minor_tick0";
        /// Sets the tick color.
        [xaxis_minor_tick_color, yaxis_minor_tick_color]: text => "minor_tickcolor";
        /// Sets the tick length (in px).
        [xaxis_minor_tick_length, yaxis_minor_tick_length]: int => "minor_ticklen";
        /// Sets the tick mode for this axis.
        [xaxis_minor_tick_mode, yaxis_minor_tick_mode]: text => "minor_tickmode";
        /// Determines whether ticks are drawn or not.
        [xaxis_minor_ticks, yaxis_minor_ticks]: text => "minor_ticks";
        /// Sets the values at which ticks on this axis appear.
        [xaxis_minor_tick_values, yaxis_minor_tick_values]: list => "minor_tickvals";
        /// Sets the tick width (in px).
        [xaxis_minor_tick_width, yaxis_minor_tick_width]: int => "minor_tickwidth";

        /// Determines if the axis lines or/and ticks are mirrored to the opposite side of the
        /// plotting area.
        [xaxis_mirror, yaxis_mirror]: any => "mirror";

        /// Specifies the maximum number of ticks for the particular axis.
        [xaxis_nticks, yaxis_nticks]: int => "nticks";

        /// If set a same-letter axis id, this axis is overlaid on top of the corresponding same-
        /// letter axis, with traces and axes visible for both axes.
        [xaxis_overlaying, yaxis_overlaying]: text => "overlaying";

        /// Sets the position of this axis in the plotting space (in normalized coordinates).
        [xaxis_position, yaxis_position]: real => "position";

        [xaxis_range_breaks, yaxis_range_breaks]: list => "rangebreaks";
        /// Sets the lower and upper bounds of this axis rangebreak.
        [xaxis_range_breaks_bounds, yaxis_range_breaks_bounds]: list => "rangebreaks_bounds";
        /// Sets the size of each values item.
        [xaxis_range_breaks_dvalue, yaxis_range_breaks_dvalue]: int => "rangebreaks_dvalue";
        /// Determines whether this axis rangebreak is enabled or disabled.
        [xaxis_range_breaks_enabled, yaxis_range_breaks_enabled]: flag => "rangebreaks_enabled";
        /// When used in a template, named items are created in the output figure in addition to any
        /// items the figure already has in this array.
        [xaxis_range_breaks_name, yaxis_range_breaks_name]: text => "rangebreaks_name";
        /// Determines a pattern on the time line that generates breaks.
        [xaxis_range_breaks_pattern, yaxis_range_breaks_pattern]: text => "rangebreaks_pattern";
        /// Used to refer to a named item in this array in the template.
        [xaxis_range_breaks_template_item_name, yaxis_range_breaks_template_item_name]: text => "rangebreaks_templateitemname";
        /// Sets the coordinate values corresponding to the rangebreaks.
        [xaxis_range_breaks_values, yaxis_range_breaks_values]: list => "rangebreaks_values";
        /// If "normal", the range is computed in relation to the extrema of the input data.
        [xaxis_range_mode, yaxis_range_mode]: text => "rangemode";
        [xaxis_range_selector_specs, yaxis_range_selector_specs]: specs => "rangeselector";
        /// Sets the background color of the active range selector button.
        [xaxis_range_selector_active_color, yaxis_range_selector_active_color]: text => "rangeselector_activecolor";
        /// Sets the background color of the range selector buttons.
        [xaxis_range_selector_background_color, yaxis_range_selector_background_color]: text => "rangeselector_bgcolor";
        /// Sets the color of the border enclosing the range selector.
        [xaxis_range_selector_border_color, yaxis_range_selector_border_color]: text => "rangeselector_bordercolor";
        /// Sets the width (in px) of the border enclosing the range selector.
        [xaxis_range_selector_border_width, yaxis_range_selector_border_width]: int => "rangeselector_borderwidth";
        [xaxis_range_selector_buttons, yaxis_range_selector_buttons]: list => "rangeselector_buttons";
        /// Sets the number of steps to take to update the range.
        [xaxis_range_selector_count, yaxis_range_selector_count]: int => "rangeselector_count";
        /// Sets the text label to appear on the button.
        [xaxis_range_selector_label, yaxis_range_selector_label]: text => "rangeselector_label";
        /// When used in a template, named items are created in the output figure in addition to any
        /// items the figure already has in this array.
        [xaxis_range_selector_name, yaxis_range_selector_name]: text => "rangeselector_name";
        /// The unit of measurement that the count value will set the range by.
        [xaxis_range_selector_step, yaxis_range_selector_step]: text => "rangeselector_step";
        /// Sets the range update mode.
        [xaxis_range_selector_step_mode, yaxis_range_selector_step_mode]: text => "rangeselector_stepmode";
        /// Used to refer to a named item in this array in the template.
        [xaxis_range_selector_template_item_name, yaxis_range_selector_template_item_name]: text => "rangeselector_templateitemname";
        /// Sets the font of the range selector button text.
        [xaxis_range_selector_font_specs, yaxis_range_selector_font_specs]: specs => "rangeselector_font";
        [xaxis_range_selector_font_color, yaxis_range_selector_font_color]: text => "rangeselector_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        [xaxis_range_selector_font_family, yaxis_range_selector_font_family]: text => "rangeselector_font_family";
        [xaxis_range_selector_font_size, yaxis_range_selector_font_size]: int => "rangeselector_font_size";
        /// Determines whether or not this range selector is visible.
        [xaxis_range_selector_visible, yaxis_range_selector_visible]: flag => "rangeselector_visible";
        /// Sets the x position (in normalized coordinates) of the range selector.
        [xaxis_range_selector_x, yaxis_range_selector_x]: real => "rangeselector_x";
        /// Sets the range selector's horizontal position anchor.
        [xaxis_range_selector_xanchor, yaxis_range_selector_xanchor]: text => "rangeselector_xanchor";
        /// Sets the y position (in normalized coordinates) of the range selector.
        [xaxis_range_selector_y, yaxis_range_selector_y]: real => "rangeselector_y";
        /// Sets the range selector's vertical position anchor This anchor binds the y position to
        /// the "top", "middle" or "bottom" of the range selector.
        [xaxis_range_selector_yanchor, yaxis_range_selector_yanchor]: text => "rangeselector_yanchor";
        [xaxis_range_slider_specs, yaxis_range_slider_specs]: specs => "rangeslider";
        /// Determines whether or not the range slider range is computed in relation to the input
        /// data.
        [xaxis_range_slider_auto_range, yaxis_range_slider_auto_range]: flag => "rangeslider_autorange";
        /// Sets the background color of the range slider.
        [xaxis_range_slider_background_color, yaxis_range_slider_background_color]: text => "rangeslider_bgcolor";
        /// Sets the border color of the range slider.
        [xaxis_range_slider_border_color, yaxis_range_slider_border_color]: text => "rangeslider_bordercolor";
        /// Sets the border width of the range slider.
        [xaxis_range_slider_border_width, yaxis_range_slider_border_width]: int => "rangeslider_borderwidth";
        /// Sets the range of the range slider.
        [xaxis_range_slider_range, yaxis_range_slider_range]: list => "rangeslider_range";
        /// The height of the range slider as a fraction of the total plot area height.
        [xaxis_range_slider_thickness, yaxis_range_slider_thickness]: real => "rangeslider_thickness";
        /// Determines whether or not the range slider will be visible.
        [xaxis_range_slider_visible, yaxis_range_slider_visible]: flag => "rangeslider_visible";
        [xaxis_range_slider_yaxis_specs, yaxis_range_slider_yaxis_specs]: specs => "rangeslider_yaxis";
        /// Determines whether or not the range of this axis in the rangeslider use the same value
        /// than in the main plot when zooming in/out.
        [xaxis_range_slider_yaxis_range_mode, yaxis_range_slider_yaxis_range_mode]: text => "rangeslider_yaxis_rangemode";

        /// If set to another axis id (e.g.
        [xaxis_scale_anchor, yaxis_scale_anchor]: text => "scaleanchor";
        /// If this axis is linked to another by scaleanchor, this determines the pixel to unit
        /// scale ratio.
        [xaxis_scale_ratio, yaxis_scale_ratio]: real => "scaleratio";

        /// If "True", even 4-digit integers are separated
        [xaxis_separate_thousands, yaxis_separate_thousands]: flag => "separatethousands";

        /// Determines whether or not a dividers are drawn between the category levels of this axis.
        [xaxis_show_dividers, yaxis_show_dividers]: flag => "showdividers";
        /// If "all", all exponents are shown besides their significands.
        [xaxis_show_exponent, yaxis_show_exponent]: text => "showexponent";
        /// Determines whether or not grid lines are drawn.
        [xaxis_show_grid, yaxis_show_grid]: flag => "showgrid";
        /// Determines whether or not a line bounding this axis is drawn.
        [xaxis_show_line, yaxis_show_line]: flag => "showline";
        /// Determines whether or not spikes (aka droplines) are drawn for this axis.
        [xaxis_show_spikes, yaxis_show_spikes]: flag => "showspikes";
        /// Determines whether or not the tick labels are drawn.
        [xaxis_show_tick_labels, yaxis_show_tick_labels]: flag => "showticklabels";
        /// If "all", all tick labels are displayed with a prefix.
        [xaxis_show_tick_prefix, yaxis_show_tick_prefix]: text => "showtickprefix";
        /// Same as showtickprefix but for tick suffixes.
        [xaxis_show_tick_suffix, yaxis_show_tick_suffix]: text => "showticksuffix";

        /// Determines whether a x (y) axis is positioned at the "bottom" ("left") or "top"
        /// ("right") of the plotting area.
        [xaxis_side, yaxis_side]: text => "side";

        /// Sets the spike color.
        [xaxis_spike_color, yaxis_spike_color]: text => "spikecolor";
        /// Sets the dash style of lines.
        [xaxis_spike_dash, yaxis_spike_dash]: text => "spikedash";
        /// Determines the drawing mode for the spike line If "toaxis", the line is drawn from the
        /// data point to the axis the series is plotted on.
        [xaxis_spike_mode, yaxis_spike_mode]: text => "spikemode";
        /// Determines whether spikelines are stuck to the cursor or to the closest datapoints.
        [xaxis_spike_snap, yaxis_spike_snap]: text => "spikesnap";
        /// Sets the width (in px) of the zero line.
        [xaxis_spike_thickness, yaxis_spike_thickness]: int => "spikethickness";

        /// Sets the placement of the first tick on this axis.
        [xaxis_tick0, yaxis_tick0]: any => "tick0";

        /// Sets the angle of the tick labels with respect to the horizontal.
        [xaxis_tick_angle, yaxis_tick_angle]: any => "tickangle";
        /// Sets the tick color.
        [xaxis_tick_color, yaxis_tick_color]: text => "tickcolor";
        /// Sets the tick font.
        [xaxis_tick_font_specs, yaxis_tick_font_specs]: specs => "tickfont";
        [xaxis_tick_font_color, yaxis_tick_font_color]: text => "tickfont_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        [xaxis_tick_font_family, yaxis_tick_font_family]: text => "tickfont_family";
        [xaxis_tick_font_size, yaxis_tick_font_size]: int => "tickfont_size";
        /// Sets the tick label formatting rule using d3 formatting mini-languages which are very
        /// similar to those in Python.
        [xaxis_tick_format, yaxis_tick_format]: text => "tickformat";
        [xaxis_tick_format_stops, yaxis_tick_format_stops]: list => "tickformatstops";
        /// range ["min", "max"], where "min", "max" - dtick values which describe some zoom level,
        /// it is possible to omit "min" or "max" value by passing "null"
        [xaxis_tick_format_stops_dtick_range, yaxis_tick_format_stops_dtick_range]: list => "tickformatstops_dtickrange";
        /// Determines whether or not this stop is used.
        [xaxis_tick_format_stops_enabled, yaxis_tick_format_stops_enabled]: flag => "tickformatstops_enabled";
        /// When used in a template, named items are created in the output figure in addition to any
        /// items the figure already has in this array.
        [xaxis_tick_format_stops_name, yaxis_tick_format_stops_name]: text => "tickformatstops_name";
        /// Used to refer to a named item in this array in the template.
        [xaxis_tick_format_stops_template_item_name, yaxis_tick_format_stops_template_item_name]: text => "tickformatstops_templateitemname";
        /// string - dtickformat for described zoom level, the same as "tickformat"
        [xaxis_tick_format_stops_value, yaxis_tick_format_stops_value]: text => "tickformatstops_value";
        /// Determines where tick labels are drawn with respect to their corresponding ticks and
        /// grid lines.
        [xaxis_tick_label_mode, yaxis_tick_label_mode]: text => "ticklabelmode";
        /// Determines how we handle tick labels that would overflow either the graph div or the
        /// domain of the axis.
        [xaxis_tick_label_overflow, yaxis_tick_label_overflow]: text => "ticklabeloverflow";
        /// Determines where tick labels are drawn with respect to the axis Please note that top or
        /// bottom has no effect on x axes or when ticklabelmode is set to "period".
        [xaxis_tick_label_position, yaxis_tick_label_position]: text => "ticklabelposition";
        /// Sets the spacing between tick labels as compared to the spacing between ticks.
        [xaxis_tick_label_step, yaxis_tick_label_step]: int => "ticklabelstep";
        /// Sets the tick length (in px).
        [xaxis_tick_length, yaxis_tick_length]: int => "ticklen";
        /// Sets the tick mode for this axis.
        [xaxis_tick_mode, yaxis_tick_mode]: text => "tickmode";
        /// Sets a tick label prefix.
        [xaxis_tick_prefix, yaxis_tick_prefix]: text => "tickprefix";

        /// Determines whether ticks are drawn or not.
        [xaxis_ticks, yaxis_ticks]: text => "ticks";
        /// Determines where ticks and grid lines are drawn with respect to their corresponding tick
        /// labels.
        [xaxis_ticks_on, yaxis_ticks_on]: text => "tickson";

        /// Sets a tick label suffix.
        [xaxis_tick_suffix, yaxis_tick_suffix]: text => "ticksuffix";
        /// Sets the text displayed at the ticks position via tickvals.
        [xaxis_tick_text, yaxis_tick_text]: list => "ticktext";
        /// Sets the values at which ticks on this axis appear.
        [xaxis_tick_values, yaxis_tick_values]: list => "tickvals";
        /// Sets the tick width (in px).
        [xaxis_tick_width, yaxis_tick_width]: int => "tickwidth";

        [xaxis_title_specs, yaxis_title_specs]: specs => "title";
        /// Sets this axis' title font.
        [xaxis_title_font_specs, yaxis_title_font_specs]: specs => "title_font";
        [xaxis_title_font_color, yaxis_title_font_color]: text => "title_font_color";
        /// HTML font family - the typeface that will be applied by the web browser.
        [xaxis_title_font_family, yaxis_title_font_family]: text => "title_font_family";
        [xaxis_title_font_size, yaxis_title_font_size]: int => "title_font_size";
        /// Sets the standoff distance (in px) between the axis labels and the title text The
        /// default value is a function of the axis tick labels, the title font.size and the axis
        /// linewidth.
        [xaxis_title_standoff, yaxis_title_standoff]: int => "title_standoff";
        /// Sets the title of this axis.
        [xaxis_title_text, yaxis_title_text] | [xaxis_title, yaxis_title]: text => "title_text";

        /// Sets the axis type.
        [xaxis_type, yaxis_type]: text => "type";

        /// Controls persistence of user-driven changes in axis range, autorange, and title if in
        /// editable: True configuration.
        [xaxis_uirevision, yaxis_uirevision]: any => "uirevision";

        /// A single toggle to hide the axis while preserving interaction like dragging.
        [xaxis_visible, yaxis_visible]: flag => "visible";

        /// Determines whether or not a line is drawn at along the 0 value of this axis.
        [xaxis_zero_line, yaxis_zero_line]: flag => "zeroline";
        /// Sets the line color of the zero line.
        [xaxis_zero_line_color, yaxis_zero_line_color]: text => "zerolinecolor";
        /// Sets the width (in px) of the zero line.
        [xaxis_zero_line_width, yaxis_zero_line_width]: int => "zerolinewidth";
    }
}
